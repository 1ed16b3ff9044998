#![no_main]
use libfuzzer_sys::fuzz_target;
use urlref::{
    escape, escape_userinfo,
    pct_enc::{decode, encode, encoder},
    unescape, unescape_userinfo,
};

fuzz_target!(|data: (&str, &str)| {
    let (s, t) = data;

    assert_eq!(unescape(&escape(s)).unwrap(), s);
    assert_eq!(decode::<encoder::Path>(&encode::<encoder::Path>(s)).unwrap(), s);
    assert_eq!(decode::<encoder::Opaque>(&encode::<encoder::Opaque>(s)).unwrap(), s);
    assert_eq!(decode::<encoder::Fragment>(&encode::<encoder::Fragment>(s)).unwrap(), s);

    if !t.is_empty() {
        let (user, password) = unescape_userinfo(&escape_userinfo(s, t)).unwrap();
        assert_eq!((user.as_str(), password.as_str()), (s, t));
    }

    if !s.contains(['%', '+']) {
        assert_eq!(unescape(s).unwrap(), s);
    }
});
