/// Tail of `input` that fits in `total_width` after a `prefix_len` label,
/// plus the cursor column inside the visible part.
pub fn clipped_input(input: &str, total_width: usize, prefix_len: usize) -> (String, u16) {
    let max_len = total_width.saturating_sub(prefix_len + 1);
    let count = input.chars().count();
    if count <= max_len {
        (input.to_string(), count as u16)
    } else {
        let visible: String = input.chars().skip(count - max_len).collect();
        (visible, max_len as u16)
    }
}

/// First index of a `height`-line window that keeps `selected` visible.
pub fn window_start(selected: usize, height: usize) -> usize {
    if height == 0 || selected < height {
        0
    } else {
        selected + 1 - height
    }
}
