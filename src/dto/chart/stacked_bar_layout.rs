use crate::common::*;

use crate::enums::{cost_category::*, pipeline_error::*};
use crate::model::usage::usage_table::*;

#[doc = "A single stacked block: one category on one date column."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct StackedSegment {
    category: CostCategory,
    column_idx: usize,
    bottom: f64,
    value: f64,
    label: String,
}

impl StackedSegment {
    pub fn top(&self) -> f64 {
        self.bottom + self.value
    }

    #[doc = "Anchor of the value label: the vertical midpoint of the segment."]
    pub fn label_y(&self) -> f64 {
        self.bottom + self.value / 2.0
    }
}

#[doc = r#"
    Everything the chart needs to draw, computed without touching a drawing backend.

    Segments are stacked in `CostCategory::ALL` order; each segment starts where the
    previous rows of the same column ended. Zero-valued segments are kept so that
    their `0.0` label is still drawn.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct StackedBarLayout {
    x_labels: Vec<String>,
    legend_labels: Vec<&'static str>,
    segments: Vec<StackedSegment>,
    y_min: f64,
    y_max: f64,
}

/* 슬롯 폭 대비 막대 폭 */
pub const BAR_WIDTH_RATIO: f64 = 0.7;

pub fn format_amount_label(amount: f64) -> String {
    format!("{:.1}", amount)
}

impl StackedBarLayout {
    pub fn from_usage_table(usage_table: &UsageTable) -> anyhow::Result<Self> {
        if usage_table.is_empty() {
            return Err(PipelineError::Render(
                "[StackedBarLayout->from_usage_table] Cannot render a usage table without date columns".to_string(),
            )
            .into());
        }

        let mut segments: Vec<StackedSegment> = Vec::new();
        let mut offsets: Vec<f64> = vec![0.0; usage_table.column_count()];

        for category in CostCategory::ALL {
            for (column_idx, column) in usage_table.columns().iter().enumerate() {
                let value: f64 = column.amounts().get(category);

                if !value.is_finite() {
                    return Err(PipelineError::Render(format!(
                        "[StackedBarLayout->from_usage_table] Non-finite amount {} for '{}' on {}",
                        value,
                        category.label(),
                        column.date_label()
                    ))
                    .into());
                }

                segments.push(StackedSegment::new(
                    category,
                    column_idx,
                    offsets[column_idx],
                    value,
                    format_amount_label(value),
                ));

                offsets[column_idx] += value;
            }
        }

        let (y_min, y_max) = Self::calculate_y_range(&segments);

        Ok(StackedBarLayout {
            x_labels: usage_table.column_labels(),
            legend_labels: usage_table.row_labels(),
            segments,
            y_min,
            y_max,
        })
    }

    #[doc = "Y-axis range covering every segment edge, always including zero, with 10% headroom"]
    fn calculate_y_range(segments: &[StackedSegment]) -> (f64, f64) {
        let (low, high) = segments
            .iter()
            .flat_map(|segment| [segment.bottom, segment.top()])
            .fold((0.0_f64, 0.0_f64), |(low, high), edge| {
                (low.min(edge), high.max(edge))
            });

        let padding: f64 = ((high - low) * 0.1).max(1.0);
        let y_min: f64 = if low < 0.0 { low - padding } else { 0.0 };

        (y_min, high + padding)
    }

    #[doc = r#"
        X 축은 날짜 열마다 폭 1 인 슬롯 하나씩, `[0, 열 개수)` 구간이다.
        열 `i` 의 슬롯은 `[i, i + 1)` 이고 막대와 라벨은 슬롯 중앙 `i + 0.5` 에 놓인다.
    "#]
    pub fn slot_count(&self) -> usize {
        self.x_labels.len()
    }

    pub fn x_range(&self) -> std::ops::Range<f64> {
        0.0..self.slot_count() as f64
    }

    pub fn slot_center(column_idx: usize) -> f64 {
        column_idx as f64 + 0.5
    }

    pub fn slot_centers(&self) -> Vec<f64> {
        (0..self.slot_count()).map(Self::slot_center).collect()
    }

    #[doc = "Left and right x edges of the bar drawn in column `column_idx`."]
    pub fn bar_span(column_idx: usize) -> (f64, f64) {
        let center: f64 = Self::slot_center(column_idx);
        (center - BAR_WIDTH_RATIO / 2.0, center + BAR_WIDTH_RATIO / 2.0)
    }

    #[doc = "Date label of the slot containing `x`, if any."]
    pub fn x_label_at(&self, x: f64) -> Option<&str> {
        if !x.is_finite() || x < 0.0 {
            return None;
        }

        self.x_labels.get(x.floor() as usize).map(String::as_str)
    }

    pub fn category_segments(
        &self,
        category: CostCategory,
    ) -> impl Iterator<Item = &StackedSegment> {
        self.segments
            .iter()
            .filter(move |segment| segment.category == category)
    }
}

#[cfg(test)]
impl StackedBarLayout {
    pub fn column_segments(&self, column_idx: usize) -> impl Iterator<Item = &StackedSegment> {
        self.segments
            .iter()
            .filter(move |segment| segment.column_idx == column_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::usage::category_amount::*;

    fn column(values: &[(CostCategory, f64)]) -> CategoryAmount {
        let mut amounts: CategoryAmount = CategoryAmount::default();
        for (category, value) in values {
            amounts.set(*category, *value);
        }
        amounts
    }

    #[test]
    fn test_segments_stack_in_row_order() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[
                (CostCategory::RelationalDatabase, 12.3),
                (CostCategory::Ec2Other, 5.0),
                (CostCategory::Others, 3.0),
            ]),
        );

        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(&table).unwrap();
        let segments: Vec<&StackedSegment> = layout.column_segments(0).collect();

        assert_eq!(segments.len(), 7);
        assert_eq!(*segments[0].category(), CostCategory::RelationalDatabase);
        assert_eq!(*segments[0].bottom(), 0.0);
        assert!((segments[0].label_y() - 6.15).abs() < 1e-9);

        let ec2: &StackedSegment = segments[3];
        assert_eq!(*ec2.category(), CostCategory::Ec2Other);
        assert!((ec2.bottom() - 12.3).abs() < 1e-9);
        assert!((ec2.label_y() - 14.8).abs() < 1e-9);

        let others: &StackedSegment = segments[6];
        assert!((others.bottom() - 17.3).abs() < 1e-9);
        assert!((others.top() - 20.3).abs() < 1e-9);
        assert_eq!(others.label(), "3.0");
        assert!(*layout.y_max() > 20.3);
        assert_eq!(*layout.y_min(), 0.0);
    }

    #[test]
    fn test_all_zero_table_still_labels_every_segment() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), CategoryAmount::default());
        table.insert_column("7/4".to_string(), CategoryAmount::default());

        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(&table).unwrap();

        assert_eq!(layout.legend_labels().len(), 7);
        assert_eq!(layout.legend_labels()[6], "Others");
        assert_eq!(layout.segments().len(), 14);
        for segment in layout.segments() {
            assert_eq!(segment.label(), "0.0");
            assert_eq!(segment.top(), segment.bottom().to_owned());
            assert_eq!(segment.label_y(), 0.0);
        }
        assert_eq!(*layout.y_min(), 0.0);
        assert_eq!(*layout.y_max(), 1.0);
    }

    #[test]
    fn test_one_slot_per_date_column() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), CategoryAmount::default());
        table.insert_column("7/4".to_string(), CategoryAmount::default());

        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(&table).unwrap();

        assert_eq!(layout.slot_count(), 2);
        assert_eq!(layout.x_range(), 0.0..2.0);
        assert_eq!(layout.slot_centers(), vec![0.5, 1.5]);
        assert_eq!(layout.x_label_at(0.5), Some("7/3"));
        assert_eq!(layout.x_label_at(1.5), Some("7/4"));
        assert_eq!(layout.x_label_at(2.0), None);
        assert_eq!(layout.x_label_at(-0.5), None);

        let (left, right) = StackedBarLayout::bar_span(1);
        assert!(left > 1.0 && right < 2.0);
        assert!(((left + right) / 2.0 - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_column_fills_the_whole_axis() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[(CostCategory::Tax, 1.2)]),
        );

        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(&table).unwrap();

        assert_eq!(layout.slot_count(), 1);
        assert_eq!(layout.x_range(), 0.0..1.0);
        assert_eq!(layout.slot_centers(), vec![0.5]);
        assert_eq!(layout.x_label_at(0.5), Some("7/3"));
    }

    #[test]
    fn test_negative_others_extends_range_below_zero() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[(CostCategory::Tax, 1.0), (CostCategory::Others, -3.0)]),
        );

        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(&table).unwrap();

        assert!(*layout.y_min() < -2.0);
        let others: &StackedSegment = layout
            .category_segments(CostCategory::Others)
            .next()
            .unwrap();
        assert_eq!(*others.bottom(), 1.0);
        assert_eq!(others.top(), -2.0);
    }

    #[test]
    fn test_nan_amount_is_render_error() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[(CostCategory::Tax, f64::NAN)]),
        );

        let err: anyhow::Error = StackedBarLayout::from_usage_table(&table).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Render(_))
        ));
    }

    #[test]
    fn test_empty_table_is_render_error() {
        let err: anyhow::Error =
            StackedBarLayout::from_usage_table(&UsageTable::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Render(_))
        ));
    }
}
