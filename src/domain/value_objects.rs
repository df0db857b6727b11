use rust_decimal::Decimal;
use std::borrow::Borrow;
use std::fmt;

/// 書籍IDのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookIdError {
    /// 空文字列
    Empty,
}

/// 書籍ID - カタログ内で書籍を一意に識別する
///
/// 呼び出し側が指定する（システムでは採番しない）。
/// 不変条件：空文字列ではない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(String);

impl BookId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookId {
    type Error = BookIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(BookIdError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for BookId {
    type Error = BookIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.0
    }
}

// IndexMap<BookId, _> を &str で引けるようにする
impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 価格のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// 負の値
    Negative,
}

/// 価格
///
/// 不変条件：0以上の10進数。
/// 型システムでこの制約を強制し、負の価格を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost(Decimal);

impl Cost {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for Cost {
    type Error = CostError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CostError::Negative);
        }
        Ok(Self(value))
    }
}

impl From<Cost> for Decimal {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl fmt::Display for BookIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookIdError::Empty => f.write_str("id cannot be empty"),
        }
    }
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostError::Negative => f.write_str("cost cannot be negative"),
        }
    }
}
