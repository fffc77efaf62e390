/// An athlete name reduced to the form the IWF results search expects.
///
/// The stored name is lower-cased, every character outside `a-z` and the
/// space is dropped (so "D'angelo" becomes "dangelo", not "d angelo"), and
/// the remainder is split on single spaces. The first token is the first
/// name, the last token is the last name; a single token leaves the last
/// name empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IwfName {
    first: String,
    last: String,
}

impl IwfName {
    /// # Examples
    ///
    /// ```
    /// use storage::models::IwfName;
    ///
    /// let name = IwfName::from_display_name("D'angelo Osorio");
    /// assert_eq!(name.as_tuple(), ("dangelo", "osorio"));
    /// ```
    pub fn from_display_name(name: &str) -> Self {
        let lowered: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect();

        let tokens: Vec<&str> = lowered.split(' ').collect();
        match tokens.as_slice() {
            [first, .., last] => Self {
                first: (*first).to_string(),
                last: (*last).to_string(),
            },
            _ => Self {
                first: lowered.clone(),
                last: String::new(),
            },
        }
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.first, &self.last)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.first, self.last)
    }
}

/// Split `name` into the IWF (first, last) pair.
pub fn to_iwf_name(name: &str) -> (String, String) {
    IwfName::from_display_name(name).into_parts()
}
