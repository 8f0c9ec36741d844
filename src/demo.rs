//! The four fixed computations and the ordered report they produce.

use crate::arith::{AndNotVal, NativeWidth, WrappingAddVal, WrappingMulVal};
use serde::Serialize;
use tracing::debug;

/// One printed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    U8(u8),
    I8(i8),
    Native(u64),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::Native(v) => write!(f, "{v}"),
        }
    }
}

/// One output line: the values of a single computation, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub name: &'static str,
    pub values: Vec<Value>,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub native_width: NativeWidth,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoInputs {
    pub u: u8,
    pub i: i8,
    pub x: u8,
    pub y: u8,
    /// Reduced to the configured native width before use.
    pub a: u64,
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            u: 255,
            i: 127,
            x: 10,
            y: 10,
            a: 0,
        }
    }
}

/// `u`, `u + 1`, `u * u` in 8-bit unsigned arithmetic.
pub fn unsigned_overflow(u: u8) -> Line {
    Line {
        name: "unsigned_overflow",
        values: vec![
            Value::U8(u),
            Value::U8(u.wrapping_add_val(1)),
            Value::U8(u.wrapping_mul_val(u)),
        ],
    }
}

/// `i`, `i + 1`, `i * i` in 8-bit two's-complement arithmetic.
pub fn signed_overflow(i: i8) -> Line {
    Line {
        name: "signed_overflow",
        values: vec![
            Value::I8(i),
            Value::I8(i.wrapping_add_val(1)),
            Value::I8(i.wrapping_mul_val(i)),
        ],
    }
}

/// `x &^ y`: bits of `x` with every bit of `y` cleared.
pub fn and_not(x: u8, y: u8) -> Line {
    Line {
        name: "and_not",
        values: vec![Value::U8(x.and_not_val(y))],
    }
}

/// `a - 1` at the given native width.
pub fn native_underflow(a: u64, width: NativeWidth) -> Line {
    Line {
        name: "native_underflow",
        values: vec![Value::Native(width.wrapping_sub(a, 1))],
    }
}

/// The four computations, run in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct Demo {
    inputs: DemoInputs,
    width: NativeWidth,
}

impl Demo {
    pub fn new(inputs: DemoInputs, width: NativeWidth) -> Self {
        Self { inputs, width }
    }

    pub fn with_width(width: NativeWidth) -> Self {
        Self::new(DemoInputs::default(), width)
    }

    pub fn width(&self) -> NativeWidth {
        self.width
    }

    pub fn run(&self) -> Report {
        let DemoInputs { u, i, x, y, a } = self.inputs;
        let lines = vec![
            unsigned_overflow(u),
            signed_overflow(i),
            and_not(x, y),
            native_underflow(a, self.width),
        ];
        for line in &lines {
            debug!(name = line.name, values = %line, "computed");
        }
        Report {
            native_width: self.width,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_line_for_max() {
        assert_eq!(unsigned_overflow(255).to_string(), "255 0 1");
    }

    #[test]
    fn signed_line_for_max() {
        assert_eq!(signed_overflow(127).to_string(), "127 -128 1");
    }

    #[test]
    fn signed_line_for_min() {
        // -128 * -128 = 16384, a multiple of 256.
        assert_eq!(signed_overflow(-128).to_string(), "-128 -127 0");
    }

    #[test]
    fn and_not_equal_operands() {
        assert_eq!(and_not(10, 10).to_string(), "0");
        assert_eq!(and_not(0b1111, 0b0101).to_string(), "10");
    }

    #[test]
    fn native_underflow_per_width() {
        assert_eq!(
            native_underflow(0, NativeWidth::W64).to_string(),
            "18446744073709551615"
        );
        assert_eq!(native_underflow(0, NativeWidth::W32).to_string(), "4294967295");
    }

    #[test]
    fn run_emits_lines_in_order() {
        let report = Demo::default().run();
        let names: Vec<_> = report.lines.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            [
                "unsigned_overflow",
                "signed_overflow",
                "and_not",
                "native_underflow"
            ]
        );
        assert_eq!(report.native_width, NativeWidth::W64);
    }

    #[test]
    fn custom_inputs_flow_through() {
        let inputs = DemoInputs {
            u: 16,
            i: -1,
            x: 0xF0,
            y: 0x30,
            a: 10,
        };
        let report = Demo::new(inputs, NativeWidth::W32).run();
        let rendered: Vec<String> = report.lines.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["16 17 0", "-1 0 1", "192", "9"]);
    }
}
