#![no_main]
use libfuzzer_sys::fuzz_target;
use urlref::{resolve::Resolver, Url};

fuzz_target!(|data: (&str, &str)| {
    let (Ok(base), Ok(r)) = (Url::parse_reference(data.0), Url::parse_reference(data.1)) else {
        return;
    };

    let u = base.resolve(&r);
    assert_eq!(u.fragment_opt(), r.fragment_opt());
    if r.scheme_opt().is_none() {
        assert_eq!(u.scheme_opt(), base.scheme_opt());
    }

    let resolver = Resolver::with_base(&base).allow_path_underflow(false);
    if let Ok(strict) = resolver.resolve(&r) {
        assert_eq!(strict, u);
    }
});
