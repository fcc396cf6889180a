use lazy_static::lazy_static;

lazy_static! {
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
    pub static ref FAIL_TODO: bool = std::env::var("FAIL_TODO") == Ok("1".into());
}

macro_rules! fail {
    ($msg:expr) => {
        libtest_mimic::Outcome::Failed {
            msg: Some(String::from($msg)),
        }
    };
    ($($fmt:tt)*) => {
        libtest_mimic::Outcome::Failed {
            msg: Some(format!($($fmt)*)),
        }
    };
}

macro_rules! real_path {
    ($path:expr) => {
        format!("bigint/{}", $path)
    };
}
