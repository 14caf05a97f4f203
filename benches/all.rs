use bencher::{benchmark_group, benchmark_main, black_box, Bencher};

use idn::Profile;

fn to_ascii_already_ascii(bench: &mut Bencher) {
    let domain = "www.example.com";
    bench.iter(|| Profile::default().to_ascii(black_box(domain)));
}

fn to_ascii_mapped(bench: &mut Bencher) {
    let domain = "WWW.Example.Com";
    bench.iter(|| Profile::default().to_ascii(black_box(domain)));
}

fn to_ascii_unicode(bench: &mut Bencher) {
    let domain = "www.m\u{FC}nchen.de";
    bench.iter(|| Profile::default().to_ascii(black_box(domain)));
}

fn to_ascii_strict(bench: &mut Bencher) {
    let domain = "www.m\u{FC}nchen.de";
    bench.iter(|| Profile::resolve().to_ascii(black_box(domain)));
}

fn to_unicode_already_ascii(bench: &mut Bencher) {
    let domain = "www.example.com";
    bench.iter(|| Profile::default().to_unicode(black_box(domain)));
}

fn to_unicode_puny(bench: &mut Bencher) {
    let domain = "www.xn--mnchen-3ya.de";
    bench.iter(|| Profile::default().to_unicode(black_box(domain)));
}

fn to_unicode_rtl(bench: &mut Bencher) {
    let domain = "xn--4db20a.xn--01-xld";
    bench.iter(|| Profile::default().to_unicode(black_box(domain)));
}

benchmark_group!(
    benches,
    to_ascii_already_ascii,
    to_ascii_mapped,
    to_ascii_unicode,
    to_ascii_strict,
    to_unicode_already_ascii,
    to_unicode_puny,
    to_unicode_rtl
);
benchmark_main!(benches);
