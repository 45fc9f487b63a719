/// Fits `bytes` into a field of exactly `width` bytes.
///
/// Shorter input is zero-padded on the right. Longer input is truncated to
/// `width` and its last byte is forced to `0`, so a truncated text field is
/// still NUL-terminated.
#[must_use]
pub fn fit(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut field = Vec::with_capacity(width);
    if bytes.len() > width {
        field.extend_from_slice(&bytes[..width]);
        if let Some(last) = field.last_mut() {
            *last = 0;
        }
    } else {
        field.extend_from_slice(bytes);
        field.resize(width, 0);
    }
    field
}
