//! Shared test utilities and fixtures for the US listing adapter


/// Total width fixture lines are padded to
pub const FIXTURE_LINE_WIDTH: usize = 260;

/// Builder for fixed-width listing lines with every anchor in place
#[derive(Debug, Clone)]
pub struct UsLineBuilder {
    pub call_sign: String,
    pub frequency: String,
    pub daytime: bool,
    pub city: String,
    pub state: String,
    pub latitude: String,
    pub longitude: String,
    pub operator: String,
    pub power: String,
}

impl UsLineBuilder {
    pub fn new(call_sign: &str) -> Self {
        Self {
            call_sign: call_sign.to_string(),
            frequency: "540   kHz".to_string(),
            daytime: true,
            city: "New York".to_string(),
            state: "NY".to_string(),
            latitude: "40 58 0.0".to_string(),
            longitude: "73 58 0.0".to_string(),
            operator: "ABC Radio Inc".to_string(),
            power: "5.0".to_string(),
        }
    }

    pub fn frequency(mut self, frequency: &str) -> Self {
        self.frequency = frequency.to_string();
        self
    }

    pub fn nighttime(mut self) -> Self {
        self.daytime = false;
        self
    }

    pub fn location(mut self, city: &str, state: &str) -> Self {
        self.city = city.to_string();
        self.state = state.to_string();
        self
    }

    pub fn latitude(mut self, latitude: &str) -> Self {
        self.latitude = latitude.to_string();
        self
    }

    pub fn longitude(mut self, longitude: &str) -> Self {
        self.longitude = longitude.to_string();
        self
    }

    pub fn operator(mut self, operator: &str) -> Self {
        self.operator = operator.to_string();
        self
    }

    pub fn power(mut self, power: &str) -> Self {
        self.power = power.to_string();
        self
    }

    /// Render the line, padded to [`FIXTURE_LINE_WIDTH`]
    pub fn build(&self) -> String {
        let mut line = String::from(" ");
        line.push_str(&format!("{:<13}", self.call_sign));
        line.push_str(&format!("{:<9}", self.frequency));
        line.push_str(if self.daytime {
            "  Daytime    DA1  B  "
        } else {
            "  Nighttime  DA2  B  "
        });
        line.push_str(&format!("{:<27}", self.city));
        line.push_str(&format!("{:<2}", self.state));
        line.push_str(" US ");
        line.push_str("BL-19850101   ");
        line.push_str(" N  ");
        line.push_str(&self.latitude);
        line.push_str(" W  ");
        line.push_str(&format!("{:<16}", self.longitude));
        line.push_str(&self.operator);
        line.push_str("  ");
        line.push_str(&self.power);
        line.push_str(" kW  Unlimited");

        while line.chars().count() < FIXTURE_LINE_WIDTH {
            line.push(' ');
        }
        line
    }
}

/// A small listing with a header, a valid station, a nighttime entry and a footer
pub fn create_test_listing() -> String {
    [
        "AM QUERY RESULTS".to_string(),
        UsLineBuilder::new("WABC").build(),
        UsLineBuilder::new("WCBS")
            .frequency("880   kHz")
            .location("New York", "NY")
            .latitude("40 51 37.0")
            .longitude("73 47 10.0")
            .operator("Audacy License LLC")
            .power("50")
            .build(),
        UsLineBuilder::new("WXYZ").nighttime().build(),
        UsLineBuilder::new("KFI")
            .frequency("640   kHz")
            .location("Los Angeles", "CA")
            .latitude("33 52 47.0")
            .longitude("118 0 47.0")
            .operator("iHM Licenses")
            .power("50.0")
            .build(),
        "end of listing".to_string(),
    ]
    .join("\n")
}
