//! Host-level tests for the hexagonal layout primitives.

use hex_face::{
    FaceExpression, Frame, GRID_COLUMNS, Glyph, HEX_LAYOUT, LED_COUNT, ROWS, face::SMILE, lookup,
};
use smart_leds::RGB8;

#[test]
fn rows_hold_5_7_9_7_5_leds() {
    let per_row: Vec<u32> = (0..ROWS)
        .map(|row| HEX_LAYOUT.row_mask(row).count_ones())
        .collect();
    assert_eq!(per_row, vec![5, 7, 9, 7, 5]);
    assert_eq!(per_row.iter().sum::<u32>(), LED_COUNT as u32);
}

#[test]
fn index_and_position_are_inverse() {
    for led in 0..LED_COUNT as u8 {
        let (row, column) = HEX_LAYOUT.position(led).expect("every LED has a position");
        assert_eq!(HEX_LAYOUT.led_index(row, column), Some(led));
    }
}

#[test]
fn grid_positions_without_led_map_to_none() {
    let mut mapped = 0;
    for row in 0..ROWS {
        for column in 0..GRID_COLUMNS {
            let has_led = HEX_LAYOUT.row_mask(row) & (1 << column) != 0;
            assert_eq!(HEX_LAYOUT.led_index(row, column).is_some(), has_led);
            mapped += usize::from(has_led);
        }
    }
    assert_eq!(mapped, LED_COUNT);
}

#[test]
fn middle_row_runs_edge_to_edge() {
    let leds: Vec<u8> = (0..GRID_COLUMNS)
        .filter_map(|column| HEX_LAYOUT.led_index(2, column))
        .collect();
    assert_eq!(leds, (12..=20).collect::<Vec<u8>>());
}

#[test]
fn eight_lights_expected_leds() {
    let eight = lookup('8').expect("'8' is built in");
    assert_eq!(
        HEX_LAYOUT.lit_leds(eight, 0).as_slice(),
        &[1, 2, 3, 6, 10, 15, 16, 17, 22, 26, 29, 30, 31]
    );
}

#[test]
fn shifted_eight_drops_columns_off_the_hexagon() {
    let eight = lookup('8').expect("'8' is built in");
    assert_eq!(
        HEX_LAYOUT.lit_leds(eight, 3).as_slice(),
        &[4, 9, 18, 19, 20, 25, 32]
    );
}

#[test]
fn shifted_out_of_view_lights_nothing() {
    let eight = lookup('8').expect("'8' is built in");
    assert!(HEX_LAYOUT.lit_leds(eight, 7).is_empty());
    assert!(HEX_LAYOUT.lit_leds(eight, -7).is_empty());
}

#[test]
fn bits_past_the_grid_are_ignored() {
    let glyph = Glyph::new('w', [0xFE00; ROWS]);
    assert!(HEX_LAYOUT.lit_leds(&glyph, 0).is_empty());
}

#[test]
fn paint_two_glyphs_for_scrolling_text() {
    let black = RGB8::default();
    let blue = RGB8::new(0, 0, 100);
    let mut frame: Frame = [black; LED_COUNT];

    let dot = lookup('.').expect("'.' is built in");
    let one = lookup('1').expect("'1' is built in");
    HEX_LAYOUT.paint(&mut frame, dot, -3, blue);
    HEX_LAYOUT.paint(&mut frame, one, 2, blue);

    let lit: Vec<usize> = frame
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel == blue)
        .map(|(index, _)| index)
        .collect();
    // '.' lands on row 4, column 1: no LED there. The right end of the '1' base is cut off.
    assert_eq!(lit, vec![4, 9, 10, 18, 26, 31, 32]);
}

#[test]
fn paint_face_lights_exactly_its_leds() {
    const FROWN: FaceExpression<'static> = FaceExpression::new(&[7, 9, 22, 23, 24, 25, 26, 28, 32]);
    let off = RGB8::default();
    let pink = RGB8::new(100, 0, 100);
    let mut frame: Frame = [off; LED_COUNT];

    HEX_LAYOUT.paint_face(&mut frame, &FROWN, pink);

    let lit: Vec<usize> = (0..LED_COUNT).filter(|&led| frame[led] == pink).collect();
    assert_eq!(lit, [7, 9, 22, 23, 24, 25, 26, 28, 32]);
    // Eyes sit on row 1, mouth corners drop to row 4.
    assert_eq!(HEX_LAYOUT.position(7), Some((1, 3)));
    assert_eq!(HEX_LAYOUT.position(28), Some((4, 2)));
}

#[test]
fn repainting_a_face_replaces_only_its_leds() {
    let off = RGB8::default();
    let green = RGB8::new(0, 80, 0);
    let mut frame: Frame = [green; LED_COUNT];

    HEX_LAYOUT.paint_face(&mut frame, &SMILE, off);

    for (led, pixel) in frame.iter().enumerate() {
        let expected = if SMILE.contains(led as u8) { off } else { green };
        assert_eq!(*pixel, expected, "LED {led}");
    }
    assert_eq!(frame.iter().filter(|pixel| **pixel == off).count(), SMILE.len());
}
