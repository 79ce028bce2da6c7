use cosmwasm_std::Uint128;

/// Ascending cumulative thresholds `total * k / n` for k = 1..=n, rounded up.
///
/// The last threshold always equals the total, so a venue quoted at every
/// threshold covers the whole request.
pub fn sample_amounts(total: Uint128, n: usize) -> Vec<Uint128> {
    let n = n as u128;
    if n == 0 {
        return Vec::new();
    }
    (1..=n)
        .map(|k| {
            let floor = total.multiply_ratio(k, n);
            // total * k mod n, computed without widening past u128
            let rem = (total.u128() % n) * k % n;
            if rem == 0 {
                floor
            } else {
                floor + Uint128::one()
            }
        })
        .collect()
}
