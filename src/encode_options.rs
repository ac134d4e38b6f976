use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeFlag {
    pub name: &'static str,
    pub value: Option<String>,
}

/// Compression flags handed to the encoder, in the order they render.
///
/// Only options the user actually set make it in here. Values are kept as the
/// user typed them; range checks are left to the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    flags: Vec<EncodeFlag>,
}

impl EncodeOptions {
    pub fn assemble(quality: Option<&str>, lossless: bool, compression_level: Option<&str>) -> Self {
        let mut options = Self::default();
        if let Some(q) = quality {
            options.push("q", Some(q));
        }
        if let Some(z) = compression_level {
            options.push("z", Some(z));
        }
        if lossless {
            options.push("lossless", None);
        }
        options
    }

    fn push(&mut self, name: &'static str, value: Option<&str>) {
        self.flags.push(EncodeFlag {
            name,
            value: value.map(str::to_owned),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self) -> &[EncodeFlag] {
        &self.flags
    }

    /// Argv tokens for the encoder, one entry per flag name and value.
    pub fn args(&self) -> Vec<String> {
        self.flags
            .iter()
            .flat_map(|flag| {
                std::iter::once(format!("-{}", flag.name)).chain(flag.value.clone())
            })
            .collect()
    }
}

impl fmt::Display for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}
