use serde::{Deserialize, Serialize};

// ============================================================================
// Distinct lists
// ============================================================================

/// Категории, меню и подкатегории бэкенд отдаёт списком уникальных имён
pub type CategoryList = Vec<String>;
pub type MenuList = Vec<String>;
pub type SubcategoryList = Vec<String>;

/// Нормализация списка имён: без пустых строк и точных дублей (после trim),
/// регистр сохраняется, порядок бэкенда тоже
pub fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

// ============================================================================
// Product columns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnDataType {
    #[default]
    Text,
    Number,
    Currency,
    Boolean,
    Date,
    Image,
}

/// Колонка таблицы товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductColumn {
    pub key: String,
    pub label: String,
    #[serde(rename = "dataType", default)]
    pub data_type: ColumnDataType,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl ProductColumn {
    /// Выравнивание в таблице: числа и суммы по правому краю
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.data_type,
            ColumnDataType::Number | ColumnDataType::Currency
        )
    }
}

// ============================================================================
// Display types
// ============================================================================

/// Тип отображения товара на витрине
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
