use std::{fmt::Display, str::FromStr};

use crate::{
    error::{VectorError, VectorResult},
    vector::{vector, Vector},
};

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Parses `[x, y]` or a bare `x, y`.
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> VectorResult<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(s);

        let mut components = inner.split(',');
        let (Some(x), Some(y), None) = (components.next(), components.next(), components.next())
        else {
            return Err(VectorError::new(format!(
                "expected two comma separated components in `{s}`"
            )));
        };

        Ok(vector(parse_component(x)?, parse_component(y)?))
    }
}

fn parse_component(s: &str) -> VectorResult<f64> {
    let s = s.trim();
    s.parse()
        .map_err(|err| VectorError::new(format!("invalid vector component `{s}`")).with_source(err))
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> VectorResult<Self> {
        match values {
            [x, y] => Ok(vector(*x, *y)),
            _ => Err(VectorError::new(format!(
                "expected 2 components, found {}",
                values.len()
            ))),
        }
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        bytemuck::cast(v)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        vector(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from(value: [f64; 2]) -> Self {
        bytemuck::cast(value)
    }
}

impl AsRef<[f64; 2]> for Vector {
    fn as_ref(&self) -> &[f64; 2] {
        self.as_array()
    }
}

#[cfg(feature = "glam")]
mod glam_interop {
    use crate::{operand::Point, vector::Vector};

    impl Point for glam::DVec2 {
        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> f64 {
            self.y
        }
    }

    impl From<glam::DVec2> for Vector {
        fn from(v: glam::DVec2) -> Self {
            Vector::new(v.x, v.y)
        }
    }

    impl From<Vector> for glam::DVec2 {
        fn from(v: Vector) -> Self {
            glam::DVec2::new(v.x, v.y)
        }
    }
}
