use adgen_core::{ParameterEntry, StoredPreset};

pub struct PresetTable {
    name_width: usize,
    placements_width: usize,
    size_width: usize,
    overrides_width: usize,
    created_width: usize,
}

impl PresetTable {
    pub fn new(presets: &[StoredPreset]) -> Self {
        let name_width = presets
            .iter()
            .map(|p| p.name().chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 40); // Between "Name" header min and reasonable terminal width max

        Self {
            name_width,
            placements_width: 10,
            size_width: 11,
            overrides_width: 9,
            created_width: 19,
        }
    }

    pub fn print_table(&self, presets: &[StoredPreset]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!(
            "│ {:<w1$} │ {:<w2$} │ {:<w3$} │ {:<w4$} │ {:<w5$} │",
            "Name",
            "Placements",
            "Size",
            "Overrides",
            "Created",
            w1 = self.name_width,
            w2 = self.placements_width,
            w3 = self.size_width,
            w4 = self.overrides_width,
            w5 = self.created_width,
        );
        println!("{}", self.border('├', '┼', '┤'));
        for preset in presets {
            self.print_row(preset);
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn print_row(&self, preset: &StoredPreset) {
        let config = &preset.configuration;
        let size = format!("{}x{}", config.width, config.height);
        let created = preset.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

        println!(
            "│ {:<w1$} │ {:<w2$} │ {:<w3$} │ {:<w4$} │ {:<w5$} │",
            truncate(preset.name(), self.name_width),
            config.placement_count,
            truncate(&size, self.size_width),
            config.overrides.len(),
            truncate(&created, self.created_width),
            w1 = self.name_width,
            w2 = self.placements_width,
            w3 = self.size_width,
            w4 = self.overrides_width,
            w5 = self.created_width,
        );
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let widths = [
            self.name_width,
            self.placements_width,
            self.size_width,
            self.overrides_width,
            self.created_width,
        ];
        rule(&widths, left, mid, right)
    }
}

/// Key / description / example listing for one catalog group.
pub struct CatalogTable {
    key_width: usize,
    description_width: usize,
    example_width: usize,
}

impl CatalogTable {
    /// Column widths fit every entry that will be printed, so all groups
    /// line up.
    pub fn new<'a>(params: impl Iterator<Item = &'a ParameterEntry>) -> Self {
        let mut key_width = 3;
        let mut description_width = 11;
        for param in params {
            key_width = key_width.max(param.key.len());
            description_width = description_width.max(param.description.chars().count());
        }

        Self {
            key_width: key_width.min(20),
            description_width: description_width.min(60),
            example_width: 30,
        }
    }

    pub fn print_table(&self, params: &[&ParameterEntry]) {
        let widths = [self.key_width, self.description_width, self.example_width];
        println!("{}", rule(&widths, '┌', '┬', '┐'));
        for param in params {
            println!(
                "│ {:<w1$} │ {:<w2$} │ {:<w3$} │",
                truncate(param.key, self.key_width),
                truncate(param.description, self.description_width),
                truncate(param.example, self.example_width),
                w1 = self.key_width,
                w2 = self.description_width,
                w3 = self.example_width,
            );
        }
        println!("{}", rule(&widths, '└', '┴', '┘'));
    }
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("this-is-too-long", 10), "this-is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("São Paulo", 20), "São Paulo");
        assert_eq!(truncate("ãããããããããã", 5), "ãã...");
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule(&[1, 2], '┌', '┬', '┐'), "┌───┬────┐");
    }

    #[test]
    fn test_catalog_table_widths() {
        let table = CatalogTable::new(adgen_core::catalog::entries().iter());
        assert!(table.key_width >= "connectiontype".len());
        assert!(table.description_width <= 60);
    }
}
