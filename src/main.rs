//! `jerry-curl`: run curl with default options taken from a config file.
//!
//! All of the logic lives in the [`jerry_curl`] library; this binary only hands control to it.

fn main() -> jerry_curl::SnafuReport<jerry_curl::Error> {
    jerry_curl::jerry_curl_main()
}
