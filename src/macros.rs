/// Declare a [`Meter`](crate::Meter) with its family's line arity checked at
/// compile time.
///
/// ```
/// use chandas::meter;
///
/// let indravajra = meter!(Samavrtta, "Indravajra", ["GGL GGL LGL GG"]);
/// let puspitagra = meter!(Ardhasamavrtta, "Puspitagra", ["LLLLLLGLGLGG", "LLLLGLLGLGLGG"]);
/// let arya = meter!(Jati, "Arya", [""], counts: [12, 18, 12, 15]);
///
/// assert_eq!(indravajra.num_syllables(), 44);
/// assert_eq!(puspitagra.lines()[2], "LLLLLLGLGLGG");
/// assert_eq!(arya.counts(), Some(&[12, 18, 12, 15][..]));
/// ```
#[macro_export]
macro_rules! meter {
    (Samavrtta, $name:expr, [ $line:expr $(,)? ] $(,)?) => {
        $crate::Meter::samavrtta($name, $line)
    };
    (Ardhasamavrtta, $name:expr, [ $odd:expr, $even:expr $(,)? ] $(,)?) => {
        $crate::Meter::ardhasamavrtta($name, $odd, $even)
    };
    (Vishamavrtta, $name:expr, [ $a:expr, $b:expr, $c:expr, $d:expr $(,)? ] $(,)?) => {
        $crate::Meter::vishamavrtta($name, [$a, $b, $c, $d])
    };
    (Jati, $name:expr, [ $line:expr $(,)? ], counts: [ $($count:expr),* $(,)? ] $(,)?) => {
        $crate::Meter::jati($name, $line, vec![ $($count),* ])
    };
}
