// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn shorthands() {
        assert_eq!(s!(), "");
        assert_eq!(s!("rice"), "rice");
        assert_eq!(join!("sales", ".", "csv"), "sales.csv");
    }
}
