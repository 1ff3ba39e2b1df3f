/// For each day, computes how many days one has to wait for a strictly warmer
/// temperature, or 0 if there is no warmer day later.
///
/// Runs in linear time using a stack of days not yet resolved. The
/// temperatures of the days on the stack are non-increasing from the bottom to
/// the top, so a warmer day resolves a suffix of the stack. This relies on
/// any two temperatures being comparable, hence the [`Ord`] bound. Floating
/// point readings can be passed through a totally ordered key such as fixed
/// point integers (e.g. tenths of a degree).
///
/// # Examples
///
/// ```
/// use stepgraph::algo::daily_temperatures;
///
/// let wait = daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]);
/// assert_eq!(wait, vec![1, 1, 4, 2, 1, 1, 0, 0]);
/// ```
pub fn daily_temperatures<T: Ord>(temperatures: &[T]) -> Vec<usize> {
    let mut wait = vec![0; temperatures.len()];
    let mut stack: Vec<usize> = Vec::with_capacity(temperatures.len());

    for (day, temperature) in temperatures.iter().enumerate() {
        while let Some(&colder) = stack.last() {
            if temperatures[colder] < *temperature {
                stack.pop();
                wait[colder] = day - colder;
            } else {
                break;
            }
        }

        stack.push(day);
    }

    wait
}
