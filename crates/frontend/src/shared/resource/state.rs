//! Состояние ресурса, загружаемого по ключу зависимостей
//!
//! Не зависит от реактивного рантайма: хук только хранит `ResourceCell`
//! в сигнале и передаёт ему события (смена ключа, ответ, размонтирование).
//! Каждый `begin` выдаёт билет с номером поколения; ответ применяется
//! только по билету текущего поколения, поэтому побеждает последний запрос.

use contracts::shared::envelope::ApiResponse;

/// Что делать со значением, если запрос завершился ошибкой
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Оставить последнее успешно загруженное значение
    KeepStale,
    /// Сбросить значение в пустой контейнер
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePhase {
    Idle,
    /// Обязательная зависимость пуста, запрос не выполняется
    NotApplicable,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub value: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            loading: false,
            error: None,
        }
    }
}

/// Билет запущенного запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    pub key: K,
    generation: u64,
}

impl<K> FetchTicket<K> {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Итог применения ответа
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<K> {
    /// Ответ записан в состояние
    Applied,
    /// Ответ устарел (вытеснен, ячейка освобождена) и отброшен
    Stale,
    /// Пока запрос был в полёте, пришёл `refresh` с тем же ключом:
    /// ответ отброшен, нужно выполнить запрос по новому билету
    Refetch(FetchTicket<K>),
}

#[derive(Debug, Clone)]
pub struct ResourceCell<K, T> {
    state: ResourceState<T>,
    phase: ResourcePhase,
    policy: FailurePolicy,
    generation: u64,
    in_flight: Option<K>,
    refresh_pending: bool,
    disposed: bool,
}

impl<K, T> ResourceCell<K, T>
where
    K: Clone + PartialEq,
    T: Default,
{
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            state: ResourceState::default(),
            phase: ResourcePhase::Idle,
            policy,
            generation: 0,
            in_flight: None,
            refresh_pending: false,
            disposed: false,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn phase(&self) -> ResourcePhase {
        self.phase
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> Option<&K> {
        self.in_flight.as_ref()
    }

    pub fn refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn issue(&mut self, key: K) -> FetchTicket<K> {
        self.generation += 1;
        self.in_flight = Some(key.clone());
        self.refresh_pending = false;
        self.state.loading = true;
        self.state.error = None;
        self.phase = ResourcePhase::Loading;

        FetchTicket {
            key,
            generation: self.generation,
        }
    }

    /// Начать загрузку для `key`.
    ///
    /// Если запрос с тем же ключом уже в полёте, второй не запускается:
    /// вместо этого запоминается отложенный refresh, и `complete` вернёт
    /// `Completion::Refetch`. `None` также после `dispose`.
    /// Запрос с другим ключом вытесняет текущий.
    pub fn begin(&mut self, key: K) -> Option<FetchTicket<K>> {
        if self.disposed {
            return None;
        }
        if self.in_flight.as_ref() == Some(&key) {
            self.refresh_pending = true;
            return None;
        }
        Some(self.issue(key))
    }

    /// Применить ответ по билету
    pub fn complete(&mut self, ticket: &FetchTicket<K>, response: ApiResponse<T>) -> Completion<K> {
        if self.disposed || ticket.generation != self.generation {
            return Completion::Stale;
        }

        if self.refresh_pending {
            return Completion::Refetch(self.issue(ticket.key.clone()));
        }

        self.in_flight = None;
        self.state.loading = false;

        match response.into_result() {
            Ok(value) => {
                self.state.value = value;
                self.state.error = None;
                self.phase = ResourcePhase::Success;
            }
            Err(message) => {
                if self.policy == FailurePolicy::Reset {
                    self.state.value = T::default();
                }
                self.state.error = Some(message);
                self.phase = ResourcePhase::Failed;
            }
        }
        Completion::Applied
    }

    /// Зависимость пуста: сбросить значение и вытеснить запрос в полёте
    pub fn skip(&mut self) {
        if self.disposed {
            return;
        }
        self.generation += 1;
        self.in_flight = None;
        self.refresh_pending = false;
        self.state = ResourceState::default();
        self.phase = ResourcePhase::NotApplicable;
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = None;
        self.refresh_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cell = ResourceCell<String, Vec<String>>;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_success_stores_value() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        assert_eq!(cell.phase(), ResourcePhase::Idle);

        let ticket = cell.begin("Bebidas".into()).unwrap();
        assert!(cell.state().loading);
        assert_eq!(cell.phase(), ResourcePhase::Loading);

        assert_eq!(
            cell.complete(&ticket, ApiResponse::success(names(&["Jugos", "Aguas"]))),
            Completion::Applied
        );
        assert_eq!(cell.state().value, names(&["Jugos", "Aguas"]));
        assert!(!cell.state().loading);
        assert_eq!(cell.state().error, None);
        assert_eq!(cell.phase(), ResourcePhase::Success);
        assert_eq!(cell.in_flight(), None);
    }

    #[test]
    fn test_last_issued_request_wins() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let first = cell.begin("A".into()).unwrap();
        let second = cell.begin("B".into()).unwrap();
        assert!(second.generation() > first.generation());

        // B отвечает раньше A
        assert_eq!(
            cell.complete(&second, ApiResponse::success(names(&["b1"]))),
            Completion::Applied
        );
        assert_eq!(
            cell.complete(&first, ApiResponse::success(names(&["a1"]))),
            Completion::Stale
        );

        assert_eq!(cell.state().value, names(&["b1"]));
        assert_eq!(cell.phase(), ResourcePhase::Success);
    }

    #[test]
    fn test_superseded_response_keeps_loading() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let first = cell.begin("A".into()).unwrap();
        let _second = cell.begin("B".into()).unwrap();

        assert_eq!(
            cell.complete(&first, ApiResponse::success(names(&["a1"]))),
            Completion::Stale
        );
        assert!(cell.state().loading);
        assert_eq!(cell.in_flight(), Some(&"B".to_string()));
    }

    #[test]
    fn test_refresh_during_same_key_fetch_is_deferred() {
        let mut cell: ResourceCell<(), Vec<String>> = ResourceCell::new(FailurePolicy::KeepStale);
        let first = cell.begin(()).unwrap();

        // refresh после мутации, пока первый запрос ещё в полёте
        assert!(cell.begin(()).is_none());
        assert!(cell.refresh_pending());
        assert_eq!(cell.generation(), first.generation());

        let next = match cell.complete(&first, ApiResponse::success(names(&["zona-borrada"]))) {
            Completion::Refetch(next) => next,
            other => panic!("expected refetch, got {:?}", other),
        };
        assert!(next.generation() > first.generation());
        assert!(cell.state().loading);
        assert!(cell.state().value.is_empty());
        assert!(!cell.refresh_pending());

        assert_eq!(
            cell.complete(&next, ApiResponse::success(names(&["Centro"]))),
            Completion::Applied
        );
        assert_eq!(cell.state().value, names(&["Centro"]));
        assert!(!cell.state().loading);
        assert_eq!(cell.in_flight(), None);
    }

    #[test]
    fn test_repeated_refresh_is_coalesced() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let first = cell.begin("A".into()).unwrap();
        assert!(cell.begin("A".into()).is_none());
        assert!(cell.begin("A".into()).is_none());

        let next = match cell.complete(&first, ApiResponse::success(names(&["x"]))) {
            Completion::Refetch(next) => next,
            other => panic!("expected refetch, got {:?}", other),
        };
        assert_eq!(
            cell.complete(&next, ApiResponse::success(names(&["y"]))),
            Completion::Applied
        );

        // после завершения новая загрузка запускается сразу
        let again = cell.begin("A".into()).unwrap();
        assert!(again.generation() > next.generation());
    }

    #[test]
    fn test_key_change_clears_pending_refresh() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let _first = cell.begin("A".into()).unwrap();
        assert!(cell.begin("A".into()).is_none());

        let second = cell.begin("B".into()).unwrap();
        assert!(!cell.refresh_pending());
        assert_eq!(
            cell.complete(&second, ApiResponse::success(names(&["b1"]))),
            Completion::Applied
        );
    }

    #[test]
    fn test_failure_with_reset_policy_clears_value() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let ticket = cell.begin("A".into()).unwrap();
        cell.complete(&ticket, ApiResponse::success(names(&["x"])));

        let ticket = cell.begin("B".into()).unwrap();
        assert_eq!(
            cell.complete(&ticket, ApiResponse::failure("Error del servidor externo (HTTP 500)")),
            Completion::Applied
        );

        assert_eq!(cell.state().value, Vec::<String>::new());
        assert_eq!(
            cell.state().error.as_deref(),
            Some("Error del servidor externo (HTTP 500)")
        );
        assert!(!cell.state().loading);
        assert_eq!(cell.phase(), ResourcePhase::Failed);
    }

    #[test]
    fn test_failure_with_keep_stale_policy_keeps_value() {
        let mut cell = Cell::new(FailurePolicy::KeepStale);
        let ticket = cell.begin("zones".into()).unwrap();
        cell.complete(&ticket, ApiResponse::success(names(&["Centro"])));

        let ticket = cell.begin("zones-2".into()).unwrap();
        cell.complete(&ticket, ApiResponse::failure("Error de conexión con el servidor"));

        assert_eq!(cell.state().value, names(&["Centro"]));
        assert_eq!(
            cell.state().error.as_deref(),
            Some("Error de conexión con el servidor")
        );
    }

    #[test]
    fn test_new_request_clears_previous_error() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let ticket = cell.begin("A".into()).unwrap();
        cell.complete(&ticket, ApiResponse::failure("boom"));

        cell.begin("A".into()).unwrap();
        assert_eq!(cell.state().error, None);
        assert!(cell.state().loading);
    }

    #[test]
    fn test_skip_resets_and_supersedes_in_flight() {
        let mut cell = Cell::new(FailurePolicy::KeepStale);
        let ticket = cell.begin("A".into()).unwrap();
        cell.complete(&ticket, ApiResponse::success(names(&["x"])));

        let pending = cell.begin("B".into()).unwrap();
        cell.skip();

        assert_eq!(cell.phase(), ResourcePhase::NotApplicable);
        assert_eq!(cell.state(), &ResourceState::default());
        assert_eq!(
            cell.complete(&pending, ApiResponse::success(names(&["late"]))),
            Completion::Stale
        );
        assert_eq!(cell.state().value, Vec::<String>::new());
    }

    #[test]
    fn test_dispose_discards_late_results() {
        let mut cell = Cell::new(FailurePolicy::Reset);
        let ticket = cell.begin("A".into()).unwrap();
        assert!(cell.begin("A".into()).is_none());
        cell.dispose();

        assert!(cell.is_disposed());
        assert_eq!(
            cell.complete(&ticket, ApiResponse::success(names(&["late"]))),
            Completion::Stale
        );
        assert!(cell.begin("A".into()).is_none());
        assert_eq!(cell.state().value, Vec::<String>::new());
    }
}
