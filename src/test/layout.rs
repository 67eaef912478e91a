#[cfg(test)]
mod tests {
    use crate::layout::*;
    use crate::*;

    #[test]
    fn numeric_setters_clamp_to_their_ranges() {
        let mut settings = ColumnSettings::new();

        settings.set_column_count(1);
        assert_eq!(settings.column_count, 2);
        settings.set_column_count(9);
        assert_eq!(settings.column_count, 6);
        settings.set_column_count(4);
        assert_eq!(settings.column_count, 4);

        settings.set_column_gap(5);
        assert_eq!(settings.column_gap, 10);
        settings.set_column_gap(300);
        assert_eq!(settings.column_gap, 100);

        settings.set_rule_width(0);
        assert_eq!(settings.rule_width, 1);
        settings.set_rule_width(25);
        assert_eq!(settings.rule_width, 10);
    }

    #[test]
    fn column_width_rounds_to_its_step() {
        let mut settings = ColumnSettings::new();

        settings.set_column_width(173);
        assert_eq!(settings.column_width, 170);
        settings.set_column_width(175);
        assert_eq!(settings.column_width, 180);
        settings.set_column_width(20);
        assert_eq!(settings.column_width, 50);
        settings.set_column_width(9999);
        assert_eq!(settings.column_width, 500);
    }

    #[test]
    fn drop_cap_presets_expand_to_fixed_pairs() {
        assert_eq!(DropCapSize::Small.font_size(), "3.8rem");
        assert_eq!(DropCapSize::Small.line_height(), "3.5rem");
        assert_eq!(DropCapSize::Medium.font_size(), "4.8rem");
        assert_eq!(DropCapSize::Medium.line_height(), "4.2rem");
        assert_eq!(DropCapSize::Large.font_size(), "6.2rem");
        assert_eq!(DropCapSize::Large.line_height(), "5.2rem");
        assert_eq!(DropCapSize::Xlarge.font_size(), "8.8rem");
        assert_eq!(DropCapSize::Xlarge.line_height(), "7.2rem");

        assert_eq!(DropCapSize::from_key("xlarge"), DropCapSize::Xlarge);
        // Unknown keys fall back to small
        assert_eq!(DropCapSize::from_key("enormous"), DropCapSize::Small);
    }

    #[test]
    fn shadow_presets_expand_to_fixed_tuples() {
        assert_eq!(ShadowSize::Small.offsets(), "5px 5px 2px 0px");
        assert_eq!(ShadowSize::Medium.offsets(), "10px 10px 5px 1px");
        assert_eq!(ShadowSize::Large.offsets(), "20px 20px 10px 5px");
        assert_eq!(ShadowSize::from_key("?"), ShadowSize::Small);
    }

    #[test]
    fn style_variant_comes_from_the_class_name() {
        assert_eq!(
            StyleVariant::from_class_name("is-style-drop-cap"),
            StyleVariant::DropCap
        );
        assert_eq!(
            StyleVariant::from_class_name("is-style-box-shadow"),
            StyleVariant::BoxShadow
        );
        assert_eq!(StyleVariant::from_class_name(""), StyleVariant::Default);
    }

    #[test]
    fn default_style_map_has_no_variant_or_color_entries() {
        let settings = ColumnSettings::default();
        let styles = settings.style_map();

        let keys: Vec<_> = styles.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "columnCount",
                "columnWidth",
                "columnGap",
                "columnRuleStyle",
                "columnRuleWidth",
            ]
        );
        assert_eq!(styles[0].1, "2");
        assert_eq!(styles[1].1, "200px");
        assert_eq!(styles[3].1, "solid");
    }

    #[test]
    fn drop_cap_variant_adds_its_custom_properties() {
        let mut settings = ColumnSettings::default();
        settings.set_variant(StyleVariant::DropCap);
        settings.set_drop_cap_size("large");
        settings.set_drop_cap_color(Some("#336699".to_string()));

        let styles = settings.style_map();
        assert!(styles.contains(&("--drop-cap-color".to_string(), "#336699".to_string())));
        assert!(styles.contains(&("--drop-cap-font-size".to_string(), "6.2rem".to_string())));
        assert!(styles.contains(&("--drop-cap-line-height".to_string(), "5.2rem".to_string())));
        assert!(!styles.iter().any(|(k, _)| k == "--box-shadow"));
    }

    #[test]
    fn box_shadow_variant_gates_its_entries() {
        let mut settings = ColumnSettings::default();
        settings.set_variant(StyleVariant::BoxShadow);
        settings.set_box_shadow("medium");

        let styles = settings.style_map();
        assert!(styles.contains(&("--box-shadow".to_string(), "10px 10px 5px 1px".to_string())));
        // No color set, so no color entry
        assert!(!styles.iter().any(|(k, _)| k == "--box-shadow-color"));

        settings.set_box_shadow_color(Some("#000".to_string()));
        let styles = settings.style_map();
        assert!(styles.contains(&("--box-shadow-color".to_string(), "#000".to_string())));
    }

    #[test]
    fn rule_color_appears_only_when_set() {
        let mut settings = ColumnSettings::default();
        assert!(!settings.style_map().iter().any(|(k, _)| k == "columnRuleColor"));

        settings.set_rule_color(Some("red".to_string()));
        assert!(settings
            .style_map()
            .contains(&("columnRuleColor".to_string(), "red".to_string())));
    }

    #[test]
    fn settings_round_trip_through_serde() {
        let mut settings = ColumnSettings::default();
        settings.set_variant(StyleVariant::DropCap);
        settings.set_drop_cap_size("medium");

        let json = serde_json::to_string(&settings).unwrap();
        let back: ColumnSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
