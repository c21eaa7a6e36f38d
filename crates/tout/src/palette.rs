//! Named colors.
//!
//! The submodules hold constants only: [`basic`] for the 16 ANSI colors under
//! their conventional names and a number of aliases, [`eight_bit`] for a few
//! 8-bit indexed colors, and [`rgb`] for 24-bit colors. The [`basic`] and
//! [`rgb`] constants convert into [`Colorant`](crate::termco::Colorant)s and
//! hence can be passed straight to the foreground and background setters. The
//! [`eight_bit`] constants are indices for
//! [`Colorant::EightBit`](crate::termco::Colorant::EightBit).

pub mod basic {
    //! The 16 ANSI colors by name.
    //!
    //! Indices 0–7 are the regular colors, 8–15 the bright colors. The names
    //! follow the common web-safe naming of the VGA palette, so that, e.g.,
    //! ANSI red (index 1) is [`MAROON`] and ANSI bright red (index 9) is
    //! [`RED`].
    use crate::termco::AnsiColor;

    pub const BLACK: AnsiColor = AnsiColor::new(0); // #000000
    pub const MAROON: AnsiColor = AnsiColor::new(1); // #800000
    pub const GREEN: AnsiColor = AnsiColor::new(2); // #008000
    pub const OLIVE: AnsiColor = AnsiColor::new(3); // #808000
    pub const NAVY: AnsiColor = AnsiColor::new(4); // #000080
    pub const PURPLE: AnsiColor = AnsiColor::new(5); // #800080
    pub const TEAL: AnsiColor = AnsiColor::new(6); // #008080
    pub const SILVER: AnsiColor = AnsiColor::new(7); // #c0c0c0
    pub const GREY: AnsiColor = AnsiColor::new(8); // #808080
    pub const RED: AnsiColor = AnsiColor::new(9); // #ff0000
    pub const LIME: AnsiColor = AnsiColor::new(10); // #00ff00
    pub const YELLOW: AnsiColor = AnsiColor::new(11); // #ffff00
    pub const BLUE: AnsiColor = AnsiColor::new(12); // #0000ff
    pub const FUCHSIA: AnsiColor = AnsiColor::new(13); // #ff00ff
    pub const AQUA: AnsiColor = AnsiColor::new(14); // #00ffff
    pub const WHITE: AnsiColor = AnsiColor::new(15); // #ffffff

    // Aliases

    pub const SALAMI: AnsiColor = MAROON;
    pub const GREEN_HILLS: AnsiColor = GREEN;
    pub const MOTH_GREEN: AnsiColor = GREEN;
    pub const MONGOLIAN_PLATEAU: AnsiColor = OLIVE;
    pub const SWAMP_GREEN: AnsiColor = OLIVE;
    pub const VERDE_TROPA: AnsiColor = OLIVE;
    pub const DEEP_BLUE: AnsiColor = NAVY;
    pub const ULTRABERRY: AnsiColor = PURPLE;
    pub const BELLY_FLOP: AnsiColor = TEAL;
    pub const MACQUARIE: AnsiColor = TEAL;
    pub const POND_BATH: AnsiColor = TEAL;
    pub const WINDOWS_95_DESKTOP: AnsiColor = TEAL;
    pub const NEO_TOKYO_GREY: AnsiColor = SILVER;
    pub const SILVER_TIPPED_SAGE: AnsiColor = SILVER;
    pub const STONEWALL_GREY: AnsiColor = SILVER;
    pub const WAXWING: AnsiColor = SILVER;
    pub const GRAY: AnsiColor = GREY;
}

pub mod eight_bit {
    //! A selection of 8-bit indexed colors by their xterm names.

    pub const GREY_0: u8 = 16;
    pub const NAVY_BLUE: u8 = 17;
    pub const DARK_GREEN: u8 = 22;
    pub const DEEP_SKY_BLUE: u8 = 39;
    pub const SPRING_GREEN: u8 = 48;
    pub const DARK_RED: u8 = 88;
    pub const DARK_MAGENTA: u8 = 90;
    pub const GOLD: u8 = 178;
    pub const ORANGE: u8 = 214;
    pub const DARK_ORANGE: u8 = 208;
    pub const HOT_PINK: u8 = 205;
    pub const ORCHID: u8 = 170;
    pub const KHAKI: u8 = 185;
    pub const GREY_50: u8 = 244;
    pub const GREY_93: u8 = 255;
}

pub mod rgb {
    //! A selection of 24-bit colors by their CSS names.
    use crate::termco::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const SILVER: Rgb = Rgb::new(192, 192, 192);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const MAROON: Rgb = Rgb::new(128, 0, 0);
    pub const OLIVE: Rgb = Rgb::new(128, 128, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const TEAL: Rgb = Rgb::new(0, 128, 128);
    pub const NAVY: Rgb = Rgb::new(0, 0, 128);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const GOLD: Rgb = Rgb::new(255, 215, 0);
    pub const CORAL: Rgb = Rgb::new(255, 127, 80);
    pub const TOMATO: Rgb = Rgb::new(255, 99, 71);
    pub const CRIMSON: Rgb = Rgb::new(220, 20, 60);
    pub const HOT_PINK: Rgb = Rgb::new(255, 105, 180);
    pub const INDIGO: Rgb = Rgb::new(75, 0, 130);
    pub const SKY_BLUE: Rgb = Rgb::new(135, 206, 235);
    pub const STEEL_BLUE: Rgb = Rgb::new(70, 130, 180);
    pub const SEA_GREEN: Rgb = Rgb::new(46, 139, 87);
    pub const CHOCOLATE: Rgb = Rgb::new(210, 105, 30);
}

#[cfg(test)]
mod test {
    use super::basic;
    use crate::termco::{AnsiColor, Colorant};

    #[test]
    fn test_basic_names() {
        assert_eq!(basic::MAROON, AnsiColor::RED);
        assert_eq!(basic::RED, AnsiColor::BRIGHT_RED);
        assert_eq!(basic::WINDOWS_95_DESKTOP, basic::TEAL);
        assert_eq!(Colorant::from(basic::WAXWING).foreground_code(), "37");
        assert_eq!(Colorant::from(basic::AQUA).background_code(), "106");
    }

    #[test]
    fn test_rgb_names() {
        assert_eq!(
            Colorant::from(super::rgb::RED).foreground_code(),
            "38;2;255;0;0"
        );
        assert_eq!(
            Colorant::EightBit(super::eight_bit::ORANGE).background_code(),
            "48;5;214"
        );
    }
}
