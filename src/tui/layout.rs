use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Form layout: stacked rows, value and unit rows split into two columns
pub struct AppLayout {
    pub title_area: Rect,
    pub category_area: Rect,
    pub left_value_area: Rect,
    pub right_value_area: Rect,
    pub left_unit_area: Rect,
    pub right_unit_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Category field
                Constraint::Length(3), // Value fields
                Constraint::Length(3), // Unit fields
                Constraint::Min(3),    // History list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let values = Self::columns(rows[2]);
        let units = Self::columns(rows[3]);

        Self {
            title_area: rows[0],
            category_area: rows[1],
            left_value_area: values[0],
            right_value_area: values[1],
            left_unit_area: units[0],
            right_unit_area: units[1],
            history_area: rows[4],
            status_area: rows[5],
        }
    }

    fn columns(row: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        [chunks[0], chunks[1]]
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.category_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // History takes what the fixed rows leave
        assert_eq!(layout.history_area.height, 30 - 1 - 3 - 3 - 3 - 1);

        assert_eq!(layout.left_value_area.width, 40);
        assert_eq!(layout.right_value_area.x, 40);
        assert_eq!(layout.left_unit_area.y, layout.left_value_area.y + 3);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 40, 10);

        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 30);
        assert_eq!(rect.y, 15);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 40, 10);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
