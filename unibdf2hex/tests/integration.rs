use quickcheck::quickcheck;
use unibdf2hex::{
    ranges::{classify, WIDE_RANGES},
    shift_row, transcode, CellWidth, TranscodeConfig,
};

const HEADER: &str = "STARTFONT 2.1\nFONTBOUNDINGBOX 16 16 0 -2\nCHARS 1\n";

/// Builds a BDF glyph record.
fn glyph(encoding: i64, bbx: (i64, i64, i64, i64), rows: &[u16]) -> String {
    let mut accum = format!("STARTCHAR g{encoding}\nENCODING {encoding}\nSWIDTH 500 0\n");
    accum.push_str(&format!("DWIDTH 8 0\nBBX {} {} {} {}\nBITMAP\n", bbx.0, bbx.1, bbx.2, bbx.3));
    for row in rows {
        accum.push_str(&format!("{row:04X}\n"));
    }
    accum.push_str("ENDCHAR\n");
    accum
}

fn convert(font: &str) -> String {
    let mut out = Vec::new();
    transcode(font.as_bytes(), &mut out, &TranscodeConfig::default()).unwrap();
    String::from_utf8(out).unwrap()
}

/// Splits a .hex line into its code point and its rows.
fn parse_line(line: &str, digits: usize) -> (u32, Vec<&str>) {
    let (code_point, payload) = line.split_once(':').unwrap();
    assert_eq!(payload.len() % digits, 0, "{line}");
    let rows = (0..payload.len() / digits).map(|i| &payload[i * digits..(i + 1) * digits]);
    (u32::from_str_radix(code_point, 16).unwrap(), rows.collect())
}

fn expected_digits(code_point: i64) -> Option<usize> {
    match classify(code_point, &TranscodeConfig::default())? {
        CellWidth::Normal => Some(2),
        CellWidth::Wide => Some(4),
    }
}

/// Check that every converted glyph fills exactly the 16 rows of the cell.
fn check_grid(code_point: u32, y_off: i8, x_off: u8, rows: Vec<u16>) -> bool {
    let code_point = code_point as i64 % 0x20000;
    let height = rows.len() as i64;
    let font = HEADER.to_string()
        + &glyph(code_point, (8, height, (x_off % 20) as i64, y_off as i64 % 24), &rows)
        + "ENDFONT\n";
    let out = convert(&font);

    match expected_digits(code_point) {
        Some(digits) => {
            let line = out.strip_suffix('\n').unwrap();
            let (parsed_cp, parsed_rows) = parse_line(line, digits);
            parsed_cp as i64 == code_point
                && parsed_rows.len() == 16
                && parsed_rows.iter().all(|row| row.bytes().all(|b| b.is_ascii_hexdigit()))
        }
        None => out.is_empty(),
    }
}

quickcheck! {
    fn grid_is_always_full(code_point: u32, y_off: i8, x_off: u8, rows: Vec<u16>) -> bool {
        check_grid(code_point, y_off, x_off, rows)
    }
}

quickcheck! {
    fn shift_never_grows_rows(row: u64, offset: u8) -> bool {
        let offset = offset as i64;
        shift_row(row, offset) <= row
            && shift_row(row, offset).leading_zeros() >= row.leading_zeros()
    }
}

quickcheck! {
    fn conversion_is_repeatable(code_points: Vec<u16>) -> bool {
        let mut font = HEADER.to_string();
        for (i, cp) in code_points.iter().enumerate() {
            font.push_str(&glyph(*cp as i64, (8, 4, 0, (i % 5) as i64), &[0x18, 0x24, 0x42, 0x7E]));
        }
        font.push_str("ENDFONT\n");
        convert(&font) == convert(&font)
    }
}

#[test]
fn every_wide_range_is_double_width() {
    let mut font = HEADER.to_string();
    for range in WIDE_RANGES {
        for cp in [range.start, (range.start + range.end) / 2, range.end] {
            font.push_str(&glyph(cp as i64, (16, 16, 0, -2), &[0xFFFF; 16]));
        }
    }
    let out = convert(&font);
    assert_eq!(out.lines().count(), WIDE_RANGES.len() * 3);
    for line in out.lines() {
        let (_, rows) = parse_line(line, 4);
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|row| *row == "FFFF"), "{line}");
    }
}

#[test]
fn header_without_dwidth() {
    // DWIDTH only appears inside glyphs, which the header scan never reaches
    let font = format!("{HEADER}{}ENDFONT\n", glyph(65, (8, 16, 0, -4), &[0x81; 16]));
    assert_eq!(convert(&font), format!("0041:{}\n", "81".repeat(16)));
}

#[test]
fn cjk_full_cell() {
    let font = format!("{HEADER}{}ENDFONT\n", glyph(19968, (16, 16, 0, 0), &[0xFFFF; 16]));
    assert_eq!(convert(&font), format!("4E00:{}\n", "F".repeat(64)));
}

#[test]
fn sixteen_pixel_base_width() {
    // wide glyphs span 32 pixels, so every row, blank or not, is 8 digits
    let header = "STARTFONT 2.1\nFONTBOUNDINGBOX 16 16 0 -2\nDWIDTH 16 0\nCHARS 2\n";
    let font = format!(
        "{header}{}{}ENDFONT\n",
        glyph(19968, (16, 2, 0, 0), &[0xFFFF, 0x8001]),
        glyph(65, (8, 1, 0, 0), &[0x81]),
    );
    let out = convert(&font);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let (code_point, rows) = parse_line(lines[0], 8);
    assert_eq!(code_point, 0x4E00);
    assert_eq!(rows.len(), 16);
    assert_eq!(&rows[10..12], &["0000FFFF", "00008001"]);
    assert!(rows.iter().enumerate().all(|(i, row)| (10..12).contains(&i) || *row == "00000000"));

    let (code_point, rows) = parse_line(lines[1], 4);
    assert_eq!(code_point, 0x41);
    assert_eq!(rows.len(), 16);
    assert_eq!(lines[1], format!("0041:{}0081{}", "0000".repeat(11), "0000".repeat(4)));
}

#[test]
fn latin_is_normal_width() {
    let font = format!("{HEADER}{}ENDFONT\n", glyph(65, (8, 4, 0, 0), &[0x18, 0x24, 0x42, 0x7E]));
    let out = convert(&font);
    let (code_point, rows) = parse_line(out.trim_end(), 2);
    assert_eq!(code_point, 0x41);
    assert_eq!(rows.len(), 16);
    assert_eq!(&rows[8..12], &["18", "24", "42", "7E"]);
}

#[test]
fn astral_glyphs_are_skipped() {
    let font = format!(
        "{HEADER}{}{}ENDFONT\n",
        glyph(1114112, (8, 1, 0, 0), &[0xFF]),
        glyph(66, (8, 1, 0, 0), &[0xFF]),
    );
    let out = convert(&font);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("0042:"));
}
