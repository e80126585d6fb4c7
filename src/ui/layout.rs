use ratatui::layout::Rect;

/// Fixed chrome: header, search box and footer are three rows each, the
/// body takes whatever is left.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let search_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + search_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + search_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + search_height + footer_height),
    };
    (header, search, body, footer)
}
