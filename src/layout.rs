//! Multi-column layout attributes: a flat configuration record where each
//! setter maps one control interaction onto one attribute, and the preset
//! enums expand a selected key into fixed derived values.

use serde::{Deserialize, Serialize};

pub const COLUMN_COUNT_MIN: u32 = 2;
pub const COLUMN_COUNT_MAX: u32 = 6;
pub const COLUMN_WIDTH_MIN: u32 = 50;
pub const COLUMN_WIDTH_MAX: u32 = 500;
pub const COLUMN_WIDTH_STEP: u32 = 10;
pub const COLUMN_GAP_MIN: u32 = 10;
pub const COLUMN_GAP_MAX: u32 = 100;
pub const RULE_WIDTH_MIN: u32 = 1;
pub const RULE_WIDTH_MAX: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    None,
    Solid,
    Dotted,
    Dashed,
    Double,
    Groove,
    Ridge,
}

impl RuleStyle {
    pub fn css_value(&self) -> &'static str {
        match self {
            RuleStyle::None => "none",
            RuleStyle::Solid => "solid",
            RuleStyle::Dotted => "dotted",
            RuleStyle::Dashed => "dashed",
            RuleStyle::Double => "double",
            RuleStyle::Groove => "groove",
            RuleStyle::Ridge => "ridge",
        }
    }
}

/// Drop-cap size preset. Selecting a key expands into a fixed font-size and
/// line-height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropCapSize {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl DropCapSize {
    /// Parse a preset key; anything unrecognized falls back to small.
    pub fn from_key(key: &str) -> Self {
        match key {
            "medium" => DropCapSize::Medium,
            "large" => DropCapSize::Large,
            "xlarge" => DropCapSize::Xlarge,
            _ => DropCapSize::Small,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DropCapSize::Small => "small",
            DropCapSize::Medium => "medium",
            DropCapSize::Large => "large",
            DropCapSize::Xlarge => "xlarge",
        }
    }

    pub fn font_size(&self) -> &'static str {
        match self {
            DropCapSize::Small => "3.8rem",
            DropCapSize::Medium => "4.8rem",
            DropCapSize::Large => "6.2rem",
            DropCapSize::Xlarge => "8.8rem",
        }
    }

    pub fn line_height(&self) -> &'static str {
        match self {
            DropCapSize::Small => "3.5rem",
            DropCapSize::Medium => "4.2rem",
            DropCapSize::Large => "5.2rem",
            DropCapSize::Xlarge => "7.2rem",
        }
    }
}

/// Box-shadow size preset, expanding to the shadow's offset/blur/spread tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowSize {
    Small,
    Medium,
    Large,
}

impl ShadowSize {
    pub fn from_key(key: &str) -> Self {
        match key {
            "medium" => ShadowSize::Medium,
            "large" => ShadowSize::Large,
            _ => ShadowSize::Small,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ShadowSize::Small => "small",
            ShadowSize::Medium => "medium",
            ShadowSize::Large => "large",
        }
    }

    pub fn offsets(&self) -> &'static str {
        match self {
            ShadowSize::Small => "5px 5px 2px 0px",
            ShadowSize::Medium => "10px 10px 5px 1px",
            ShadowSize::Large => "20px 20px 10px 5px",
        }
    }
}

/// Which block style is active; decides whether the drop-cap and box-shadow
/// attributes participate in the style map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleVariant {
    #[default]
    Default,
    DropCap,
    BoxShadow,
}

impl StyleVariant {
    /// Map the block wrapper's class name onto a variant.
    pub fn from_class_name(class_name: &str) -> Self {
        match class_name {
            "is-style-drop-cap" => StyleVariant::DropCap,
            "is-style-box-shadow" => StyleVariant::BoxShadow,
            _ => StyleVariant::Default,
        }
    }
}

/// The block's flat attribute record. Numeric setters clamp to the control's
/// min/max and round to its step; that is the only validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSettings {
    pub column_count: u32,
    pub column_width: u32,
    pub column_gap: u32,
    pub rule_style: RuleStyle,
    pub rule_width: u32,
    pub rule_color: Option<String>,
    pub drop_cap_color: Option<String>,
    pub drop_cap_size: DropCapSize,
    pub box_shadow_color: Option<String>,
    pub box_shadow: ShadowSize,
    pub variant: StyleVariant,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        ColumnSettings {
            column_count: 2,
            column_width: 200,
            column_gap: 40,
            rule_style: RuleStyle::Solid,
            rule_width: 1,
            rule_color: None,
            drop_cap_color: None,
            drop_cap_size: DropCapSize::Small,
            box_shadow_color: None,
            box_shadow: ShadowSize::Small,
            variant: StyleVariant::Default,
        }
    }
}

fn clamp_step(value: u32, min: u32, max: u32, step: u32) -> u32 {
    let clamped = value.clamp(min, max);
    let stepped = min + (clamped - min + step / 2) / step * step;
    stepped.min(max)
}

impl ColumnSettings {
    pub fn new() -> Self {
        ColumnSettings::default()
    }

    pub fn set_column_count(&mut self, count: u32) {
        self.column_count = count.clamp(COLUMN_COUNT_MIN, COLUMN_COUNT_MAX);
    }

    pub fn set_column_width(&mut self, width: u32) {
        self.column_width = clamp_step(width, COLUMN_WIDTH_MIN, COLUMN_WIDTH_MAX, COLUMN_WIDTH_STEP);
    }

    pub fn set_column_gap(&mut self, gap: u32) {
        self.column_gap = gap.clamp(COLUMN_GAP_MIN, COLUMN_GAP_MAX);
    }

    pub fn set_rule_style(&mut self, style: RuleStyle) {
        self.rule_style = style;
    }

    pub fn set_rule_width(&mut self, width: u32) {
        self.rule_width = width.clamp(RULE_WIDTH_MIN, RULE_WIDTH_MAX);
    }

    pub fn set_rule_color(&mut self, color: Option<String>) {
        self.rule_color = color;
    }

    pub fn set_drop_cap_color(&mut self, color: Option<String>) {
        self.drop_cap_color = color;
    }

    pub fn set_drop_cap_size(&mut self, key: &str) {
        self.drop_cap_size = DropCapSize::from_key(key);
    }

    pub fn set_box_shadow_color(&mut self, color: Option<String>) {
        self.box_shadow_color = color;
    }

    pub fn set_box_shadow(&mut self, key: &str) {
        self.box_shadow = ShadowSize::from_key(key);
    }

    pub fn set_variant(&mut self, variant: StyleVariant) {
        self.variant = variant;
    }

    /// The style declarations for the block wrapper, in declaration order.
    /// Color entries appear only when a color is set, and the drop-cap /
    /// box-shadow custom properties only under their style variant.
    pub fn style_map(&self) -> Vec<(String, String)> {
        let mut styles = vec![
            ("columnCount".to_string(), self.column_count.to_string()),
            ("columnWidth".to_string(), format!("{}px", self.column_width)),
            ("columnGap".to_string(), format!("{}px", self.column_gap)),
            (
                "columnRuleStyle".to_string(),
                self.rule_style.css_value().to_string(),
            ),
            ("columnRuleWidth".to_string(), format!("{}px", self.rule_width)),
        ];
        if let Some(color) = &self.rule_color {
            styles.push(("columnRuleColor".to_string(), color.clone()));
        }

        if self.variant == StyleVariant::DropCap {
            if let Some(color) = &self.drop_cap_color {
                styles.push(("--drop-cap-color".to_string(), color.clone()));
            }
            styles.push((
                "--drop-cap-font-size".to_string(),
                self.drop_cap_size.font_size().to_string(),
            ));
            styles.push((
                "--drop-cap-line-height".to_string(),
                self.drop_cap_size.line_height().to_string(),
            ));
        }

        if self.variant == StyleVariant::BoxShadow {
            styles.push(("--box-shadow".to_string(), self.box_shadow.offsets().to_string()));
            if let Some(color) = &self.box_shadow_color {
                styles.push(("--box-shadow-color".to_string(), color.clone()));
            }
        }

        styles
    }
}
