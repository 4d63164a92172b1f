use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Mat", 10), "Mat");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Sparing", 7), "Sparing");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Kommunale avgifter", 10), "Kommunale…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Lønn", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("Lån hus", 3), "Lå…");
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

// ── pad_right ─────────────────────────────────────────────────

#[test]
fn test_pad_right_pads_by_chars_not_bytes() {
    let padded = pad_right("Lønn", 8);
    assert_eq!(padded.chars().count(), 8);
    assert!(padded.starts_with("Lønn"));
}

#[test]
fn test_pad_right_truncates() {
    assert_eq!(pad_right("Diverse utgifter", 8), "Diverse…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(30000, "NOK"), "30 000 NOK");
}

#[test]
fn test_format_amount_small() {
    assert_eq!(format_amount(999, "NOK"), "999 NOK");
    assert_eq!(format_amount(0, "NOK"), "0 NOK");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(-1500, "NOK"), "-1 500 NOK");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(1234567, "SEK"), "1 234 567 SEK");
}

#[test]
fn test_format_amount_without_currency() {
    assert_eq!(format_amount(10000, ""), "10 000");
}

#[test]
fn test_format_amount_extremes() {
    assert_eq!(
        format_amount(i64::MIN, ""),
        "-9 223 372 036 854 775 808"
    );
}

// ── flow_bar ──────────────────────────────────────────────────

#[test]
fn test_flow_bar_proportional() {
    assert_eq!(flow_bar(5, 10, 10), "█████░░░░░");
    assert_eq!(flow_bar(10, 10, 4), "████");
}

#[test]
fn test_flow_bar_zero_whole() {
    assert_eq!(flow_bar(0, 0, 3), "░░░");
}

#[test]
fn test_flow_bar_tiny_part_still_visible() {
    assert_eq!(flow_bar(1, 100000, 5), "█░░░░");
}

#[test]
fn test_flow_bar_zero_part_is_empty() {
    assert_eq!(flow_bar(0, 100, 5), "░░░░░");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 12, 5);
    assert_eq!((index, scroll), (11, 7));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_into_view() {
    let mut scroll = 0;
    scroll_into_view(9, &mut scroll, 3);
    assert_eq!(scroll, 7);

    scroll_into_view(8, &mut scroll, 3);
    assert_eq!(scroll, 7);

    scroll_into_view(2, &mut scroll, 3);
    assert_eq!(scroll, 2);

    scroll_into_view(0, &mut scroll, 0);
    assert_eq!(scroll, 0);
}
