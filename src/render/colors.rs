use palette::Srgb;

/// Ten-color qualitative palette (matplotlib `tab10`).
pub const TAB10: [Srgb<u8>; 10] = [
    Srgb::new(0x1f, 0x77, 0xb4),
    Srgb::new(0xff, 0x7f, 0x0e),
    Srgb::new(0x2c, 0xa0, 0x2c),
    Srgb::new(0xd6, 0x27, 0x28),
    Srgb::new(0x94, 0x67, 0xbd),
    Srgb::new(0x8c, 0x56, 0x4b),
    Srgb::new(0xe3, 0x77, 0xc2),
    Srgb::new(0x7f, 0x7f, 0x7f),
    Srgb::new(0xbc, 0xbd, 0x22),
    Srgb::new(0x17, 0xbe, 0xcf),
];

/// Color for the entry at `index`, cycling through `palette`.
///
/// An empty palette falls back to `TAB10`.
#[must_use]
pub fn color_at(palette: &[Srgb<u8>], index: usize) -> Srgb<u8> {
    if palette.is_empty() {
        TAB10[index % TAB10.len()]
    } else {
        palette[index % palette.len()]
    }
}

/// CSS hex notation, `#rrggbb`.
#[must_use]
pub fn css_hex(color: Srgb<u8>) -> String {
    format!("#{color:x}")
}
