/// Shared chart palette; series pick colors in order.
pub const PALETTE: [&str; 10] = [
    "#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545", "#D2BA4C", "#964325",
    "#944454", "#13343B",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
