//!
//! Output artifact format.
//!

///
/// Output artifact format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG images, one per chart.
    #[default]
    Png,
    /// SVG images, one per chart.
    Svg,
    /// JSON documents with the chart data, one per chart.
    Json,
    /// One Excel workbook per compiler with native charts.
    Xlsx,
}

impl Format {
    ///
    /// All supported formats.
    ///
    pub const ALL: [Self; 4] = [Self::Png, Self::Svg, Self::Json, Self::Xlsx];

    ///
    /// The artifact file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                Self::ALL
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn parse() {
        assert_eq!("PNG".parse::<Format>().unwrap(), Format::Png);
        assert_eq!("xlsx".parse::<Format>().unwrap(), Format::Xlsx);
        let error = "pdf".parse::<Format>().unwrap_err().to_string();
        assert!(error.contains("png, svg, json, xlsx"), "{error}");
    }
}
