use crate::enums::cost_category::*;

#[doc = "하루치 카테고리별 비용. 인덱스는 `CostCategory::index()` 순서를 따른다."]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryAmount {
    amounts: [f64; 7],
}

impl CategoryAmount {
    pub fn get(&self, category: CostCategory) -> f64 {
        self.amounts[category.index()]
    }

    pub fn set(&mut self, category: CostCategory, amount: f64) {
        self.amounts[category.index()] = amount;
    }

    pub fn tracked_sum(&self) -> f64 {
        CostCategory::TRACKED
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}
