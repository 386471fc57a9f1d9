use std::hash::Hash;

/// Anything that can be indexed by the tree. Symbols are
/// copied into the buffer, hashed for the edge table and
/// ordered when children are enumerated.
pub trait Symbol: Copy + Eq + Hash + Ord {}

impl<T: Copy + Eq + Hash + Ord> Symbol for T {}

/// Symbols that can be shown in the rendering of a tree.
pub trait Readable {
  fn as_readable(&self) -> String;
}

impl Readable for u8 {
  fn as_readable(&self) -> String {
    // Non-printable bytes are escaped so a line stays a line
    if self.is_ascii_graphic() || *self == b' ' {
      (*self as char).to_string()
    } else {
      format!("\\x{:02x}", self)
    }
  }
}

impl Readable for char {
  fn as_readable(&self) -> String {
    if self.is_control() {
      self.escape_default().to_string()
    } else {
      self.to_string()
    }
  }
}

// Wider integers are wrapped, otherwise `1, 23` and `12, 3`
// would be printed the same way
macro_rules! readable_integer {
  ($($t:ty),*) => {
    $(
      impl Readable for $t {
        fn as_readable(&self) -> String {
          format!("<{}>", self)
        }
      }
    )*
  };
}

readable_integer!(u16, u32, u64, usize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bytes() {
    assert_eq!("a", b'a'.as_readable());
    assert_eq!(" ", b' '.as_readable());
    assert_eq!("\\x0a", b'\n'.as_readable());
  }

  #[test]
  fn chars() {
    assert_eq!("ä", 'ä'.as_readable());
    assert_eq!("\\t", '\t'.as_readable());
  }

  #[test]
  fn integers() {
    assert_eq!("<12>", 12u32.as_readable());
    assert_eq!("<-1>", (-1i64).as_readable());
  }
}
