// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `ParseError` of kind `Structural`, format-style.
#[macro_export]
macro_rules! structural {
    ($($arg:tt)*) => {
        $crate::error::ParseError::structural(::std::format!($($arg)*))
    };
}
