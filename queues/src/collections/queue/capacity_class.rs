/// The storage bound of a queue instance.<br/>
/// キューインスタンスの容量の分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityClass {
  /// Holds at most the given number of elements.<br/>
  /// 指定された数まで要素を保持できる。
  Exact(usize),
  /// Grows without a fixed bound.<br/>
  /// 容量制限がない。
  Unbounded,
  /// The bound cannot be told with confidence.<br/>
  /// 容量を確定できない。
  Unknown,
}

impl CapacityClass {
  pub const fn exact(value: usize) -> Self {
    Self::Exact(value)
  }

  pub const fn is_unbounded(&self) -> bool {
    matches!(self, Self::Unbounded)
  }

  pub const fn is_known(&self) -> bool {
    !matches!(self, Self::Unknown)
  }

  /// Converts to an option type.
  ///
  /// # Return Value / 戻り値
  /// - `Some(num)` - If the queue has a fixed bound. / キューに容量制限がある場合。
  /// - `None` - Otherwise. / それ以外の場合。
  pub const fn to_option(self) -> Option<usize> {
    match self {
      Self::Exact(value) => Some(value),
      Self::Unbounded | Self::Unknown => None,
    }
  }
}
