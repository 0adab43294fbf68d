//! Status bar and screen specifications.
//!
//! Widgets are plain descriptions: the host owns their live state (CPU
//! load, clock, battery, ...) and renders them.  Only the order and the
//! static styling are defined here.

use crate::bindings::{Button, LAUNCHER, MIXER};
use crate::command::Action;
use crate::config::KeyboardConfig;
use crate::layout::Margin;
use crate::theme::{Color, Mocha};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Fonts used for text; the first one is the default.
pub const TEXT_FONTS: [&str; 2] = ["Ubuntu Nerd Font", "Cousine Nerd Font"];

/// Bold markup applied to value widgets.
const BOLD: &str = "<b>{}</b>";

/// Static styling shared by all widgets.  Unset fields inherit the
/// host-wide widget defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Markup template the widget's text is wrapped in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fmt: Option<String>,
}

impl Style {
    /// Defaults for every widget on every bar.
    pub fn widget_defaults() -> Self {
        Self {
            font: Some(TEXT_FONTS[0].into()),
            fontsize: Some(12),
            padding: Some(3),
            foreground: Some(Mocha::Text.color()),
            background: Some(Mocha::Mantle.color()),
            fmt: None,
        }
    }

    /// Bold text in the default text font.
    pub fn text() -> Self {
        Self {
            font: Some(TEXT_FONTS[0].into()),
            fmt: Some(BOLD.into()),
            ..Default::default()
        }
    }

    pub fn fg(mut self, color: Mocha) -> Self {
        self.foreground = Some(color.color());
        self
    }

    pub fn bg(mut self, color: Mocha) -> Self {
        self.background = Some(color.color());
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }
}

/// Which host widget to instantiate, with its kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum WidgetKind {
    TextBox {
        text: String,
    },
    CurrentLayout,
    GroupBox {
        highlight_method: String,
        highlight_color: [Color; 2],
        active: Color,
        inactive: Color,
        this_current_screen_border: Color,
        other_current_screen_border: Color,
        this_screen_border: Color,
        other_screen_border: Color,
        use_mouse_wheel: bool,
    },
    /// Stretches to fill the remaining bar width.
    Spacer,
    NvidiaSensors {
        format: String,
    },
    #[serde(rename = "CPU")]
    Cpu {
        format: String,
    },
    ThermalSensor,
    Memory {
        measure_mem: String,
        format: String,
    },
    Systray,
    Volume,
    Battery {
        format: String,
        full_char: String,
        not_charging_char: String,
        show_short_text: bool,
    },
    Clock {
        format: String,
    },
    KeyboardLayout {
        configured_keyboards: Vec<String>,
        display_map: BTreeMap<String, String>,
    },
    QuickExit {
        countdown_start: u32,
        default_text: String,
        countdown_format: String,
    },
}

/// One bar segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    #[serde(flatten)]
    pub kind: WidgetKind,
    #[serde(flatten)]
    pub style: Style,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mouse_callbacks: BTreeMap<Button, Action>,
}

impl Widget {
    pub fn new(kind: WidgetKind, style: Style) -> Self {
        Self {
            kind,
            style,
            mouse_callbacks: BTreeMap::new(),
        }
    }

    pub fn text_box(text: impl Into<String>, style: Style) -> Self {
        Self::new(WidgetKind::TextBox { text: text.into() }, style)
    }

    /// Run `action` when the widget is clicked with `button`.
    pub fn on_click(mut self, button: Button, action: Action) -> Self {
        self.mouse_callbacks.insert(button, action);
        self
    }

    pub fn spacer() -> Self {
        Self::new(WidgetKind::Spacer, Style::default())
    }

    /// Separator dot between widget groups.
    pub fn dot() -> Self {
        Self::text_box("\u{f444}", Style::default().fg(Mocha::Surface0).padding(6))
    }
}

/// A status bar on one screen edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height (or width, on vertical edges) in pixels.
    pub size: u32,
    pub background: Color,
    pub margin: Margin,
    pub opacity: f64,
}

/// What occupies a screen edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Edge {
    Bar(Bar),
    /// Empty reserved space, in pixels.
    Gap(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    #[default]
    Fill,
    Stretch,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallpaper {
    pub path: PathBuf,
    pub mode: WallpaperMode,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Screen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<Wallpaper>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Edge>,
}

/// A glyph in front of a value widget, both in the same color.
fn labelled(glyph: &str, color: Mocha, value: Widget) -> [Widget; 2] {
    [Widget::text_box(glyph, Style::default().fg(color)), value]
}

/// The widgets of the primary bar, left to right.
///
/// With `using_spacer` off, the two stretchable spacers become dots and the
/// bar packs to the left.
pub fn widgets(using_spacer: bool, keyboards: &KeyboardConfig) -> Vec<Widget> {
    let fill = || if using_spacer { Widget::spacer() } else { Widget::dot() };
    let text = |color: Mocha| Style::text().fg(color);

    let mut w = vec![
        Widget::text_box(
            "\u{f314}",
            Style::default().fg(Mocha::Base).bg(Mocha::Teal).padding(9),
        )
        .on_click(Button::Button1, Action::spawn(LAUNCHER)),
        Widget::new(
            WidgetKind::CurrentLayout,
            Style {
                font: Some(TEXT_FONTS[1].into()),
                fmt: Some(BOLD.into()),
                ..Default::default()
            }
            .fg(Mocha::Base)
            .bg(Mocha::Sapphire)
            .padding(6),
        ),
        Widget::new(
            WidgetKind::GroupBox {
                highlight_method: "line".into(),
                highlight_color: [Mocha::Crust.color(), Mocha::Crust.color()],
                active: Mocha::Lavender.color(),
                inactive: Mocha::Surface2.color(),
                this_current_screen_border: Mocha::Lavender.color(),
                other_current_screen_border: Mocha::Lavender.color(),
                this_screen_border: Mocha::Surface2.color(),
                other_screen_border: Mocha::Surface2.color(),
                use_mouse_wheel: false,
            },
            Style::default().bg(Mocha::Crust).padding(6),
        ),
        fill(),
    ];

    w.extend(labelled(
        "\u{f0b82}",
        Mocha::Maroon,
        Widget::new(
            WidgetKind::NvidiaSensors {
                format: "{perf} {temp}°C".into(),
            },
            text(Mocha::Maroon),
        ),
    ));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f4bc}",
        Mocha::Yellow,
        Widget::new(
            WidgetKind::Cpu {
                format: "{load_percent}%".into(),
            },
            text(Mocha::Yellow),
        ),
    ));
    w.push(Widget::new(WidgetKind::ThermalSensor, text(Mocha::Yellow)));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{e266}",
        Mocha::Teal,
        Widget::new(
            WidgetKind::Memory {
                measure_mem: "G".into(),
                format: "{MemUsed: .1f}/{MemTotal: .1f}".into(),
            },
            text(Mocha::Teal),
        ),
    ));
    w.push(fill());
    w.push(Widget::new(WidgetKind::Systray, Style::default().padding(6)));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f057e}",
        Mocha::Sapphire,
        Widget::new(WidgetKind::Volume, text(Mocha::Sapphire))
            .on_click(Button::Button1, Action::spawn(MIXER)),
    ));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f240} ",
        Mocha::Sky,
        Widget::new(
            WidgetKind::Battery {
                format: "{percent:2.0%}{char}".into(),
                full_char: String::new(),
                not_charging_char: String::new(),
                show_short_text: false,
            },
            text(Mocha::Sky),
        ),
    ));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f43a}",
        Mocha::Lavender,
        Widget::new(
            WidgetKind::Clock {
                format: "%H:%M".into(),
            },
            text(Mocha::Lavender),
        ),
    ));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f455}",
        Mocha::Flamingo,
        Widget::new(
            WidgetKind::Clock {
                format: "%a %d %b".into(),
            },
            text(Mocha::Flamingo),
        ),
    ));
    w.push(Widget::dot());
    w.extend(labelled(
        "\u{f11c}",
        Mocha::Pink,
        Widget::new(
            WidgetKind::KeyboardLayout {
                configured_keyboards: keyboards.configured.clone(),
                display_map: keyboards.display_map.clone(),
            },
            text(Mocha::Pink),
        ),
    ));
    w.push(Widget::dot());
    w.push(Widget::new(
        WidgetKind::QuickExit {
            countdown_start: 1,
            default_text: "\u{f011}".into(),
            countdown_format: "\u{f011}".into(),
        },
        Style::default().fg(Mocha::Red),
    ));
    w.push(Widget::dot());
    w
}

/// The primary bar.
pub fn top_bar(widgets: Vec<Widget>) -> Bar {
    Bar {
        widgets,
        size: 27,
        background: Mocha::Base.color(),
        margin: [6, 6, 0, 6],
        opacity: 0.95,
    }
}

/// Two screens: the primary carries the bar, both keep a 6px gap on the
/// left and bottom edges.
pub fn screens(wallpaper: Option<Wallpaper>, bar: Bar) -> Vec<Screen> {
    let gaps = |top| Screen {
        wallpaper: wallpaper.clone(),
        top,
        left: Some(Edge::Gap(6)),
        bottom: Some(Edge::Gap(6)),
        right: None,
    };
    vec![gaps(Some(Edge::Bar(bar))), gaps(None)]
}
