use crate::common::*;

use crate::enums::cost_category::*;
use crate::model::usage::category_amount::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct UsageColumn {
    date_label: String,
    amounts: CategoryAmount,
}

#[doc = r#"
    행 = 카테고리(추적 대상 6개 + Others), 열 = 날짜 라벨인 비용 테이블.

    열 순서는 리포트가 전달한 순서를 그대로 유지한다. 이미 존재하는 날짜 라벨이
    다시 들어오면 기존 열의 위치는 유지하고 값만 교체한다.
"#]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsageTable {
    columns: Vec<UsageColumn>,
}

impl UsageTable {
    pub fn insert_column(&mut self, date_label: String, amounts: CategoryAmount) {
        match self
            .columns
            .iter_mut()
            .find(|column| column.date_label == date_label)
        {
            Some(column) => column.amounts = amounts,
            None => self.columns.push(UsageColumn::new(date_label, amounts)),
        }
    }

    pub fn columns(&self) -> &[UsageColumn] {
        &self.columns
    }

    pub fn column_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.date_label.clone())
            .collect()
    }

    pub fn row_labels(&self) -> Vec<&'static str> {
        CostCategory::ALL.iter().map(|category| category.label()).collect()
    }

    pub fn row_count(&self) -> usize {
        CostCategory::ALL.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
impl UsageTable {
    pub fn amount(&self, category: CostCategory, column_idx: usize) -> Option<f64> {
        self.columns
            .get(column_idx)
            .map(|column| column.amounts.get(category))
    }

    pub fn column_by_label(&self, date_label: &str) -> Option<&CategoryAmount> {
        self.columns
            .iter()
            .find(|column| column.date_label == date_label)
            .map(|column| &column.amounts)
    }
}

impl Display for UsageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width: usize = CostCategory::ALL
            .iter()
            .map(|category| category.label().len())
            .max()
            .unwrap_or(0);

        write!(f, "{:label_width$}", "")?;
        for column in &self.columns {
            write!(f, " {:>8}", column.date_label)?;
        }
        writeln!(f)?;

        for category in CostCategory::ALL {
            write!(f, "{:label_width$}", category.label())?;
            for column in &self.columns {
                write!(f, " {:>8.1}", column.amounts.get(category))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts_with(category: CostCategory, amount: f64) -> CategoryAmount {
        let mut amounts: CategoryAmount = CategoryAmount::default();
        amounts.set(category, amount);
        amounts
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/5".to_string(), CategoryAmount::default());
        table.insert_column("7/3".to_string(), CategoryAmount::default());
        table.insert_column("7/4".to_string(), CategoryAmount::default());

        assert_eq!(table.column_labels(), vec!["7/5", "7/3", "7/4"]);
        assert_eq!(table.row_count(), 7);
    }

    #[test]
    fn test_repeated_label_replaces_values_in_place() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), amounts_with(CostCategory::Tax, 1.0));
        table.insert_column("7/4".to_string(), CategoryAmount::default());
        table.insert_column("7/3".to_string(), amounts_with(CostCategory::Tax, 2.0));

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_labels(), vec!["7/3", "7/4"]);
        assert_eq!(table.amount(CostCategory::Tax, 0), Some(2.0));
    }

    #[test]
    fn test_display_lists_every_row() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), amounts_with(CostCategory::Tax, 1.2));

        let rendered: String = table.to_string();
        for label in table.row_labels() {
            assert!(rendered.contains(label), "missing row {}", label);
        }
        assert!(rendered.contains("1.2"));
    }
}
