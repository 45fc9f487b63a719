use crate::error::EncodeError;

const MAX_EXPONENT: u32 = 127;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Legacy scaling exponent for the largest absolute sample value.
///
/// Starts from `max_abs · 2^32` and halves until the value fits in 32 bits,
/// counting the halvings. Must stay a halving loop, not `log2`, to keep
/// legacy results bit-exact. NaN yields zero; infinity never fits and
/// overflows.
///
/// # Errors
///
/// [`EncodeError::ExponentOverflow`] once the count passes 127.
pub fn scaling_exponent(max_abs: f64) -> Result<i8, EncodeError> {
    let mut product = max_abs * TWO_POW_32;
    let mut exponent: u32 = 0;
    while product > TWO_POW_32 {
        product /= 2.0;
        exponent += 1;
        if exponent > MAX_EXPONENT {
            log::error!("exponent is stored in a signed byte; cannot exceed {}", MAX_EXPONENT);
            return Err(EncodeError::ExponentOverflow(exponent));
        }
    }
    Ok(exponent as i8)
}
