use crate::common::*;
use crate::dto::chart::stacked_bar_layout::*;
use crate::enums::{cost_category::*, pipeline_error::*};
use crate::model::{chart::rendered_chart::*, configs::chart_config::*, usage::usage_table::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::io_utils::*;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* matplotlib tab10 팔레트 앞쪽 7색 */
const SEGMENT_PALETTE: [RGBColor; 7] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
}

impl ChartServiceImpl {
    fn segment_color(category: CostCategory) -> RGBColor {
        SEGMENT_PALETTE[category.index() % SEGMENT_PALETTE.len()]
    }

    #[doc = "Draws the precomputed layout onto a PNG at `output_path`. Blocking."]
    fn draw_stacked_bar_chart(
        layout: &StackedBarLayout,
        output_path: &str,
        (width, height): (u32, u32),
        y_desc: &str,
    ) -> Result<(), anyhow::Error> {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        /* 날짜 열마다 슬롯 하나, 눈금은 슬롯 중앙 */
        let mut chart = ChartBuilder::on(&root)
            .margin(30)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(
                layout.x_range().with_key_points(layout.slot_centers()),
                *layout.y_min()..*layout.y_max(),
            )?;

        let text_color: RGBColor = RGBColor(40, 40, 40);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(y_desc)
            .y_labels(10)
            .light_line_style(ShapeStyle::from(&RGBColor(235, 235, 235)).stroke_width(1))
            .x_label_style(("sans-serif", 18).into_font().color(&text_color))
            .y_label_style(("sans-serif", 18).into_font().color(&text_color))
            .x_label_formatter(&|x| layout.x_label_at(*x).unwrap_or_default().to_string())
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;

        for category in CostCategory::ALL {
            let color: RGBColor = Self::segment_color(category);

            chart
                .draw_series(layout.category_segments(category).map(|segment| {
                    let (left, right) = StackedBarLayout::bar_span(*segment.column_idx());
                    Rectangle::new(
                        [(left, *segment.bottom()), (right, segment.top())],
                        color.filled(),
                    )
                }))?
                .label(category.label())
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        }

        let label_style: TextStyle = ("sans-serif", 16)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        chart.draw_series(layout.segments().iter().map(|segment| {
            Text::new(
                segment.label().clone(),
                (
                    StackedBarLayout::slot_center(*segment.column_idx()),
                    segment.label_y(),
                ),
                label_style.clone(),
            )
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&RGBColor(180, 180, 180))
            .label_font(("sans-serif", 16).into_font().color(&text_color))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_stacked_bar_chart(
        &self,
        usage_table: &UsageTable,
        output_path: &std::path::Path,
    ) -> anyhow::Result<RenderedChart> {
        let layout: StackedBarLayout = StackedBarLayout::from_usage_table(usage_table)?;

        /* Create parent directory if it doesn't exist */
        ensure_parent_dir(output_path).await.map_err(|e| {
            PipelineError::Render(format!(
                "[ChartServiceImpl->generate_stacked_bar_chart] {:?}",
                e
            ))
        })?;

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let canvas_size: (u32, u32) = (*self.chart_config.width(), *self.chart_config.height());
        let y_desc: String = self.chart_config.y_desc().to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                ChartServiceImpl::draw_stacked_bar_chart(
                    &layout,
                    &output_path_str,
                    canvas_size,
                    &y_desc,
                )
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_stacked_bar_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.map_err(|e| {
            PipelineError::Render(format!(
                "[ChartServiceImpl->generate_stacked_bar_chart] drawing/present failed: {:?}",
                e
            ))
        })?;

        info!("Stacked bar chart generated successfully: {:?}", output_path);

        Ok(RenderedChart::new(
            output_path.to_path_buf(),
            PNG_CONTENT_TYPE.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::usage::category_amount::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn column(values: &[(CostCategory, f64)]) -> CategoryAmount {
        let mut amounts: CategoryAmount = CategoryAmount::default();
        for (category, value) in values {
            amounts.set(*category, *value);
        }
        amounts
    }

    async fn render_to_tempdir(table: &UsageTable) -> (tempfile::TempDir, RenderedChart) {
        let dir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = dir.path().join("pics").join("cost.png");

        let rendered: RenderedChart = ChartServiceImpl::new(ChartConfig::default())
            .generate_stacked_bar_chart(table, &output_path)
            .await
            .unwrap();

        assert_eq!(rendered.pic_path(), &output_path);
        (dir, rendered)
    }

    fn assert_png_file(rendered: &RenderedChart) {
        assert_eq!(rendered.content_type(), PNG_CONTENT_TYPE);

        let bytes: Vec<u8> = std::fs::read(rendered.pic_path()).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert!(bytes.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn test_every_category_has_distinct_color() {
        let colors: Vec<RGBColor> = CostCategory::ALL
            .iter()
            .map(|category| ChartServiceImpl::segment_color(*category))
            .collect();

        for (idx, color) in colors.iter().enumerate() {
            assert!(!colors[idx + 1..].contains(color));
        }
    }

    #[tokio::test]
    async fn test_all_zero_table_still_produces_png() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), CategoryAmount::default());
        table.insert_column("7/4".to_string(), CategoryAmount::default());

        let (_dir, rendered) = render_to_tempdir(&table).await;

        assert_png_file(&rendered);
    }

    #[tokio::test]
    async fn test_two_day_table_renders_png() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[
                (CostCategory::RelationalDatabase, 12.3),
                (CostCategory::Ec2Other, 5.0),
                (CostCategory::Others, 3.0),
            ]),
        );
        table.insert_column("7/4".to_string(), column(&[(CostCategory::Tax, 1.2)]));

        let (_dir, rendered) = render_to_tempdir(&table).await;

        assert_png_file(&rendered);
    }

    #[tokio::test]
    async fn test_single_column_with_negative_others_renders_png() {
        let mut table: UsageTable = UsageTable::default();
        table.insert_column(
            "7/3".to_string(),
            column(&[(CostCategory::Tax, 1.0), (CostCategory::Others, -0.2)]),
        );

        let (_dir, rendered) = render_to_tempdir(&table).await;

        assert_png_file(&rendered);
    }

    #[tokio::test]
    async fn test_invalid_table_fails_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = dir.path().join("pics").join("cost.png");

        let mut amounts: CategoryAmount = CategoryAmount::default();
        amounts.set(CostCategory::Tax, f64::NAN);
        let mut table: UsageTable = UsageTable::default();
        table.insert_column("7/3".to_string(), amounts);

        let err: anyhow::Error = ChartServiceImpl::new(ChartConfig::default())
            .generate_stacked_bar_chart(&table, &output_path)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Render(_))
        ));
        assert!(!output_path.parent().unwrap().exists());
    }
}
