#![no_main]
use libfuzzer_sys::fuzz_target;
use urlref::Url;

fuzz_target!(|data: &str| {
    for r in [Url::parse(data), Url::parse_reference(data)] {
        let Ok(r) = r else { continue };

        let mut buf = String::with_capacity(data.len());
        if let Some(s) = r.scheme_opt() {
            buf.push_str(s);
            buf.push(':');
        }
        if let Some(a) = r.authority() {
            buf.push_str("//");
            let start = buf.len();
            if let Some(ui) = a.userinfo() {
                buf.push_str(ui.as_str());
                buf.push('@');
            }
            buf.push_str(a.host());
            assert_eq!(&buf[start..], a.as_str());
        }
        buf.push_str(r.raw_path());
        assert_eq!(data, buf);

        if r.opaque_path() {
            assert!(r.query().is_none());
            assert!(r.fragment_opt().is_none());
        }
        if let Some(q) = r.query() {
            assert!(r.raw_path().contains(q));
        }
    }
});
