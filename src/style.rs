//! The registry of the visual styles a resume can be rendered with.
//!
//! A style is an immutable [`StyleConfig`] which gathers the layout geometry, the color palette and
//! the font sizing of a preset. The presets form a closed set, see [`StyleName`], and looking up an
//! unknown name falls back to [`StyleName::DEFAULT`].

/// An RGB color, stored with 8-bit components so that the palettes read like the usual `#rrggbb` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// The components in the `0.0..=1.0` range, as expected by the PDF color operators.
    pub fn components(&self) -> [f32; 3] {
        [self.red, self.green, self.blue].map(|component| f32::from(component) / 255.0)
    }
}

/// The font families available to the presets, which map to the PDF standard fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAlignment {
    Left,
    Center,
}

/// The page geometry of a style. For single-column styles the sidebar width and the gutter are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub two_column: bool,
    pub margin: f32,
    pub sidebar_width: f32,
    pub gutter: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub page_background: Color,
    pub sidebar_background: Color,
    pub sidebar_heading: Color,
    pub sidebar_text: Color,
    pub heading: Color,
    pub subheading: Color,
    pub body: Color,
    pub accent: Color,
}

/// The font sizes (in points) of a style, together with its family and the alignment of the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub font_family: FontFamily,
    pub name_size: f32,
    pub title_size: f32,
    pub section_title_size: f32,
    pub body_bold_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub header_alignment: HeaderAlignment,
}

/// The complete description of a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub name: StyleName,
    pub layout: LayoutGeometry,
    pub palette: ColorPalette,
    pub typography: Typography,
    /// The thickness of the rule drawn under every section title.
    pub section_rule_width: f32,
}

/// The names of the presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Modern,
    Professional,
    Classic,
    Elegant,
    Minimalist,
    Tech,
}

impl StyleName {
    pub const DEFAULT: StyleName = StyleName::Modern;

    pub const ALL: [StyleName; 6] = [
        StyleName::Modern,
        StyleName::Professional,
        StyleName::Classic,
        StyleName::Elegant,
        StyleName::Minimalist,
        StyleName::Tech,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Modern => "Modern",
            StyleName::Professional => "Professional",
            StyleName::Classic => "Classic",
            StyleName::Elegant => "Elegant",
            StyleName::Minimalist => "Minimalist",
            StyleName::Tech => "Tech",
        }
    }

    /// Finds the preset with the given name, ignoring the case and the surrounding whitespace.
    pub fn from_name(name: &str) -> Option<StyleName> {
        let name = name.trim();
        StyleName::ALL
            .into_iter()
            .find(|style_name| style_name.as_str().eq_ignore_ascii_case(name))
    }

    pub fn config(self) -> StyleConfig {
        match self {
            StyleName::Modern => MODERN,
            StyleName::Professional => PROFESSIONAL,
            StyleName::Classic => CLASSIC,
            StyleName::Elegant => ELEGANT,
            StyleName::Minimalist => MINIMALIST,
            StyleName::Tech => TECH,
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl StyleConfig {
    /// Returns the preset with the given name, or the default one if the name is unknown.
    pub fn lookup(style_name: &str) -> StyleConfig {
        match StyleName::from_name(style_name) {
            Some(name) => name.config(),
            None => {
                log::warn!(
                    "Unknown style {:?}, falling back to the {} style",
                    style_name,
                    StyleName::DEFAULT
                );
                StyleName::DEFAULT.config()
            }
        }
    }

    pub fn is_two_column(&self) -> bool {
        self.layout.two_column
    }
}

const MODERN: StyleConfig = StyleConfig {
    name: StyleName::Modern,
    layout: LayoutGeometry {
        two_column: true,
        margin: 40.0,
        sidebar_width: 180.0,
        gutter: 20.0,
    },
    palette: ColorPalette {
        page_background: Color::WHITE,
        sidebar_background: Color::rgb(0x0f, 0x17, 0x2a),
        sidebar_heading: Color::WHITE,
        sidebar_text: Color::rgb(0xcb, 0xd5, 0xe1),
        heading: Color::rgb(0x1e, 0x29, 0x3b),
        subheading: Color::rgb(0x47, 0x55, 0x69),
        body: Color::rgb(0x33, 0x41, 0x55),
        accent: Color::rgb(0x25, 0x63, 0xeb),
    },
    typography: Typography {
        font_family: FontFamily::Helvetica,
        name_size: 27.0,
        title_size: 12.0,
        section_title_size: 17.0,
        body_bold_size: 12.0,
        body_size: 12.0,
        small_size: 11.0,
        header_alignment: HeaderAlignment::Left,
    },
    section_rule_width: 1.5,
};

const PROFESSIONAL: StyleConfig = StyleConfig {
    name: StyleName::Professional,
    layout: LayoutGeometry {
        two_column: true,
        margin: 40.0,
        sidebar_width: 170.0,
        gutter: 22.0,
    },
    palette: ColorPalette {
        page_background: Color::WHITE,
        sidebar_background: Color::rgb(0x1e, 0x3a, 0x5f),
        sidebar_heading: Color::WHITE,
        sidebar_text: Color::rgb(0xdb, 0xe4, 0xee),
        heading: Color::rgb(0x1e, 0x3a, 0x5f),
        subheading: Color::rgb(0x4b, 0x55, 0x63),
        body: Color::rgb(0x37, 0x41, 0x51),
        accent: Color::rgb(0xb8, 0x86, 0x0b),
    },
    typography: Typography {
        font_family: FontFamily::Times,
        name_size: 26.0,
        title_size: 13.0,
        section_title_size: 16.0,
        body_bold_size: 12.0,
        body_size: 11.0,
        small_size: 10.0,
        header_alignment: HeaderAlignment::Left,
    },
    section_rule_width: 1.5,
};

const CLASSIC: StyleConfig = StyleConfig {
    name: StyleName::Classic,
    layout: LayoutGeometry {
        two_column: false,
        margin: 50.0,
        sidebar_width: 0.0,
        gutter: 0.0,
    },
    palette: ColorPalette {
        page_background: Color::WHITE,
        sidebar_background: Color::WHITE,
        sidebar_heading: Color::BLACK,
        sidebar_text: Color::rgb(0x1a, 0x1a, 0x1a),
        heading: Color::BLACK,
        subheading: Color::rgb(0x40, 0x40, 0x40),
        body: Color::rgb(0x1a, 0x1a, 0x1a),
        accent: Color::BLACK,
    },
    typography: Typography {
        font_family: FontFamily::Times,
        name_size: 28.0,
        title_size: 14.0,
        section_title_size: 14.0,
        body_bold_size: 12.0,
        body_size: 11.0,
        small_size: 10.0,
        header_alignment: HeaderAlignment::Center,
    },
    section_rule_width: 1.0,
};

const ELEGANT: StyleConfig = StyleConfig {
    name: StyleName::Elegant,
    layout: LayoutGeometry {
        two_column: false,
        margin: 54.0,
        sidebar_width: 0.0,
        gutter: 0.0,
    },
    palette: ColorPalette {
        page_background: Color::rgb(0xfd, 0xfb, 0xf7),
        sidebar_background: Color::rgb(0xfd, 0xfb, 0xf7),
        sidebar_heading: Color::rgb(0x3f, 0x2e, 0x1e),
        sidebar_text: Color::rgb(0x3b, 0x3b, 0x3b),
        heading: Color::rgb(0x3f, 0x2e, 0x1e),
        subheading: Color::rgb(0x7a, 0x6a, 0x58),
        body: Color::rgb(0x3b, 0x3b, 0x3b),
        accent: Color::rgb(0xb0, 0x8d, 0x57),
    },
    typography: Typography {
        font_family: FontFamily::Times,
        name_size: 30.0,
        title_size: 14.0,
        section_title_size: 13.0,
        body_bold_size: 11.5,
        body_size: 11.0,
        small_size: 10.0,
        header_alignment: HeaderAlignment::Center,
    },
    section_rule_width: 0.5,
};

const MINIMALIST: StyleConfig = StyleConfig {
    name: StyleName::Minimalist,
    layout: LayoutGeometry {
        two_column: false,
        margin: 48.0,
        sidebar_width: 0.0,
        gutter: 0.0,
    },
    palette: ColorPalette {
        page_background: Color::WHITE,
        sidebar_background: Color::WHITE,
        sidebar_heading: Color::rgb(0x11, 0x18, 0x27),
        sidebar_text: Color::rgb(0x37, 0x41, 0x51),
        heading: Color::rgb(0x11, 0x18, 0x27),
        subheading: Color::rgb(0x6b, 0x72, 0x80),
        body: Color::rgb(0x37, 0x41, 0x51),
        accent: Color::rgb(0xd1, 0xd5, 0xdb),
    },
    typography: Typography {
        font_family: FontFamily::Helvetica,
        name_size: 24.0,
        title_size: 12.0,
        section_title_size: 12.0,
        body_bold_size: 11.0,
        body_size: 10.5,
        small_size: 9.5,
        header_alignment: HeaderAlignment::Left,
    },
    section_rule_width: 0.5,
};

const TECH: StyleConfig = StyleConfig {
    name: StyleName::Tech,
    layout: LayoutGeometry {
        two_column: false,
        margin: 40.0,
        sidebar_width: 0.0,
        gutter: 0.0,
    },
    palette: ColorPalette {
        page_background: Color::rgb(0xf8, 0xfa, 0xfc),
        sidebar_background: Color::rgb(0xf8, 0xfa, 0xfc),
        sidebar_heading: Color::rgb(0x0f, 0x17, 0x2a),
        sidebar_text: Color::rgb(0x1e, 0x29, 0x3b),
        heading: Color::rgb(0x0f, 0x17, 0x2a),
        subheading: Color::rgb(0x47, 0x55, 0x69),
        body: Color::rgb(0x1e, 0x29, 0x3b),
        accent: Color::rgb(0x10, 0xb9, 0x81),
    },
    typography: Typography {
        font_family: FontFamily::Courier,
        name_size: 24.0,
        title_size: 12.0,
        section_title_size: 14.0,
        body_bold_size: 11.0,
        body_size: 10.0,
        small_size: 9.0,
        header_alignment: HeaderAlignment::Left,
    },
    section_rule_width: 1.5,
};
