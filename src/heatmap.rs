use crate::grid::{build_grid, Grid, GridCell};
use crate::models::DataPoint;
use crate::render::{draw_heatmap, CellMap, SvgCanvas};
use crate::tooltip::{tooltip_for, Pointer, Tooltip};
use tracing::debug;

// Every mutation rebuilds the grid and repaints the whole surface.
#[derive(Debug, Clone)]
pub struct Heatmap {
    points: Vec<DataPoint>,
    grid: Grid,
    cells: CellMap,
    canvas: SvgCanvas,
    renders: u64,
}

impl Heatmap {
    pub fn new(points: Vec<DataPoint>) -> Self {
        let grid = build_grid(&points);
        let mut canvas = SvgCanvas::new();
        let cells = draw_heatmap(&mut canvas, &grid);
        Self {
            points,
            grid,
            cells,
            canvas,
            renders: 1,
        }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn svg(&self) -> String {
        self.canvas.to_markup()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
        self.render();
    }

    pub fn tooltip(&self, pointer: Pointer) -> Tooltip {
        tooltip_for(&self.points, pointer)
    }

    pub fn cell_at(&self, x: f64, y: f64) -> Option<&GridCell> {
        self.cells.lookup(x, y)
    }

    fn render(&mut self) {
        self.grid = build_grid(&self.points);
        self.cells = draw_heatmap(&mut self.canvas, &self.grid);
        self.renders += 1;
        debug!(points = self.points.len(), renders = self.renders, "heatmap redrawn");
    }
}

impl Default for Heatmap {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::cell_rect;
    use chrono::NaiveDate;

    fn march_15(count: u64) -> DataPoint {
        DataPoint::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), count)
    }

    #[test]
    fn new_heatmap_is_drawn_once() {
        let heatmap = Heatmap::default();
        assert!(heatmap.points().is_empty());
        assert_eq!(heatmap.renders, 1);
        assert_eq!(heatmap.svg().matches("<rect").count(), 84);
    }

    #[test]
    fn push_appends_and_redraws() {
        let mut heatmap = Heatmap::default();
        heatmap.push(march_15(7));

        assert_eq!(heatmap.points(), &[march_15(7)]);
        assert_eq!(heatmap.renders, 2);
        let cell = heatmap.grid().cell(2, 5).unwrap();
        assert!(!cell.synthesized);
        assert_eq!(cell.point.count, 7);
        assert!(heatmap.svg().contains("#7bc96f"));
    }

    #[test]
    fn each_push_repaints_from_scratch() {
        let mut heatmap = Heatmap::new(vec![march_15(20)]);
        heatmap.push(march_15(1));
        assert_eq!(heatmap.renders, 2);
        assert!(!heatmap.svg().contains("#196127"));
        assert!(heatmap.svg().contains("#c6e48b"));
        assert_eq!(heatmap.svg().matches("<rect").count(), 84);
    }

    #[test]
    fn tooltip_and_cell_lookup_agree_for_single_point() {
        let heatmap = Heatmap::new(vec![march_15(3)]);
        let rect = cell_rect(2, 5);

        let tooltip = heatmap.tooltip(Pointer::at(rect.x, rect.y));
        assert!(tooltip.visible);
        assert_eq!(tooltip.text, "Intensity count: 3 on 2024-03-15");
        assert_eq!(heatmap.cell_at(rect.x, rect.y).unwrap().point, march_15(3));
    }

    #[test]
    fn placeholder_cells_have_no_tooltip() {
        let heatmap = Heatmap::default();
        let rect = cell_rect(0, 0);
        assert!(!heatmap.tooltip(Pointer::at(rect.x, rect.y)).visible);
        assert!(heatmap.cell_at(rect.x, rect.y).unwrap().synthesized);
    }
}
