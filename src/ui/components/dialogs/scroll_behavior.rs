use ratatui::widgets::ScrollbarState;

pub fn scroll_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(1);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_sub(10);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn page_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = scroll_offset.saturating_add(10);
    *scrollbar_state = scrollbar_state.position(*scroll_offset);
}

pub fn scroll_to_top(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = 0;
    *scrollbar_state = scrollbar_state.position(0);
}

/// Offsets are clamped at render time, so "bottom" is simply the largest value
pub fn scroll_to_bottom(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    *scroll_offset = usize::MAX;
    *scrollbar_state = scrollbar_state.position(usize::MAX);
}

/// Clamp `scroll_offset` to the content and return the visible slice of lines
pub fn visible_window<'a>(
    lines: &[&'a str],
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> Vec<&'a str> {
    let max_scroll = lines.len().saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(lines.len())
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect()
}
