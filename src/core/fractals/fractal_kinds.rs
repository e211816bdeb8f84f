#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    Mandelbrot,
    #[default]
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Julia, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_julia() {
        assert_eq!(FractalKinds::default(), FractalKinds::Julia);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<&str> = FractalKinds::ALL.iter().map(|k| k.display_name()).collect();

        assert_eq!(names, vec!["Julia", "Mandelbrot"]);
    }
}
