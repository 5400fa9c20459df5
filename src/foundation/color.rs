/// Straight (non-premultiplied) RGBA8 parsed from a theme hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 when the string has no alpha pair).
    pub a: u8,
}

impl HexColor {
    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, leading `#` required).
    pub fn parse(s: &str) -> Result<Self, String> {
        let Some(hex) = s.trim().strip_prefix('#') else {
            return Err("hex color must start with '#'".to_owned());
        };

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        if !hex.is_ascii() {
            return Err("hex color must be ASCII".to_owned());
        }

        match hex.len() {
            6 => Ok(Self {
                r: hex_byte(&hex[0..2])?,
                g: hex_byte(&hex[2..4])?,
                b: hex_byte(&hex[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: hex_byte(&hex[0..2])?,
                g: hex_byte(&hex[2..4])?,
                b: hex_byte(&hex[4..6])?,
                a: hex_byte(&hex[6..8])?,
            }),
            _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
        }
    }
}
