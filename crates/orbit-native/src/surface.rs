/// First entry of a surface capability list, or an error naming what was missing.
pub fn first_supported<T: Copy>(caps: &[T], what: &str) -> anyhow::Result<T> {
    caps.first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("surface reports no {what}"))
}
