//! Tab-order helpers for screen controls

/// Step to the next (or previous) control in `order`, wrapping around.
///
/// A `current` value missing from `order` restarts at the first control.
pub fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let Some(pos) = order.iter().position(|c| *c == current) else {
        return order.first().copied().unwrap_or(current);
    };
    let len = order.len();
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    order[next]
}
