use crate::grid::{Grid, GridCell};
use crate::layout::{self, Rect, MONTH_LABELS, SURFACE_HEIGHT, SURFACE_WIDTH, WEEKDAY_LABELS};
use crate::palette::color_for;

const LABEL_COLOR: &str = "#000";
const LABEL_FONT: &str = "12px Arial";

pub trait Canvas {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str);
    fn fill_rect(&mut self, rect: Rect, color: &str);
}

#[derive(Debug, Default, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_markup(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="heatmap-surface" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Activity heatmap">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
        self.body.push_str(&format!(
            r#"<text x="{x}" y="{y}" fill="{color}" style="font: {LABEL_FONT}">{}</text>"#,
            escape_xml(text)
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" />"#,
            rect.x, rect.y, rect.width, rect.height
        ));
    }
}

/// Rectangles drawn in the last pass and the grid cells behind them.
#[derive(Debug, Clone, Default)]
pub struct CellMap {
    entries: Vec<(Rect, GridCell)>,
}

impl CellMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, x: f64, y: f64) -> Option<&GridCell> {
        self.entries
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, cell)| cell)
    }
}

pub fn draw_heatmap<C: Canvas>(canvas: &mut C, grid: &Grid) -> CellMap {
    canvas.clear(SURFACE_WIDTH, SURFACE_HEIGHT);
    draw_axes(canvas);

    let mut cells = CellMap::default();
    for cell in grid.cells() {
        let rect = layout::cell_rect(cell.month, cell.weekday);
        canvas.fill_rect(rect, color_for(cell.point.count));
        cells.entries.push((rect, *cell));
    }
    cells
}

fn draw_axes<C: Canvas>(canvas: &mut C) {
    for (weekday, label) in WEEKDAY_LABELS.iter().enumerate() {
        let (x, y) = layout::weekday_label_origin(weekday);
        canvas.fill_text(label, x, y, LABEL_COLOR);
    }
    for (month, label) in MONTH_LABELS.iter().enumerate() {
        let (x, y) = layout::month_label_origin(month);
        canvas.fill_text(label, x, y, LABEL_COLOR);
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::models::DataPoint;
    use chrono::NaiveDate;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Text(String),
        Rect(Rect, String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }

        fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _color: &str) {
            self.ops.push(Op::Text(text.to_string()));
        }

        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.ops.push(Op::Rect(rect, color.to_string()));
        }
    }

    fn march_15() -> DataPoint {
        DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 7)
    }

    #[test]
    fn draw_clears_then_labels_then_cells() {
        let mut canvas = Recorder::default();
        let cells = draw_heatmap(&mut canvas, &build_grid(&[]));

        assert_eq!(canvas.ops[0], Op::Clear);
        let texts = canvas.ops.iter().filter(|op| matches!(op, Op::Text(_))).count();
        assert_eq!(texts, 19);
        assert_eq!(canvas.ops[1], Op::Text("Sun".into()));
        assert_eq!(canvas.ops[8], Op::Text("Jan".into()));
        assert!(canvas.ops[20..].iter().all(|op| matches!(op, Op::Rect(..))));
        assert_eq!(canvas.ops.len(), 1 + 19 + 84);
        assert_eq!(cells.len(), 84);
    }

    #[test]
    fn cells_are_colored_by_count() {
        let mut canvas = Recorder::default();
        draw_heatmap(&mut canvas, &build_grid(&[march_15()]));

        let expected = Op::Rect(layout::cell_rect(2, 5), "#7bc96f".to_string());
        assert!(canvas.ops.contains(&expected));
        let empty = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Rect(_, color) if color == "#ebedf0"))
            .count();
        assert_eq!(empty, 83);
    }

    #[test]
    fn cell_map_resolves_drawn_cells() {
        let mut canvas = SvgCanvas::new();
        let cells = draw_heatmap(&mut canvas, &build_grid(&[march_15()]));
        let rect = layout::cell_rect(2, 5);

        let hit = cells.lookup(rect.x, rect.y).unwrap();
        assert_eq!(hit.point, march_15());
        assert!(cells.lookup(rect.x - 1.0, rect.y).is_none());
        assert!(cells.lookup(5.0, 5.0).is_none());
    }

    #[test]
    fn svg_redraw_replaces_previous_content() {
        let mut canvas = SvgCanvas::new();
        draw_heatmap(&mut canvas, &build_grid(&[march_15()]));
        draw_heatmap(&mut canvas, &build_grid(&[]));
        let markup = canvas.to_markup();

        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"viewBox="0 0 800 800""#));
        assert_eq!(markup.matches("<rect").count(), 84);
        assert_eq!(markup.matches("<text").count(), 19);
        assert!(!markup.contains("#7bc96f"));
    }

    #[test]
    fn escape_xml_handles_markup() {
        assert_eq!(escape_xml("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
