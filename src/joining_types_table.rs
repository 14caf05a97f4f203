// Generated by scripts/make_unicode_tables.py. DO NOT EDIT.
// Source: Joining_Type data bundled with the Python idna package.

static JOINING_TABLE: &[(char, char, JoiningType)] = &[
    ('\u{ad}', '\u{ad}', T),
    ('\u{300}', '\u{36f}', T),
    ('\u{483}', '\u{489}', T),
    ('\u{591}', '\u{5bd}', T),
    ('\u{5bf}', '\u{5bf}', T),
    ('\u{5c1}', '\u{5c2}', T),
    ('\u{5c4}', '\u{5c5}', T),
    ('\u{5c7}', '\u{5c7}', T),
    ('\u{610}', '\u{61a}', T),
    ('\u{61c}', '\u{61c}', T),
    ('\u{620}', '\u{620}', D),
    ('\u{622}', '\u{625}', R),
    ('\u{626}', '\u{626}', D),
    ('\u{627}', '\u{627}', R),
    ('\u{628}', '\u{628}', D),
    ('\u{629}', '\u{629}', R),
    ('\u{62a}', '\u{62e}', D),
    ('\u{62f}', '\u{632}', R),
    ('\u{633}', '\u{63f}', D),
    ('\u{640}', '\u{640}', C),
    ('\u{641}', '\u{647}', D),
    ('\u{648}', '\u{648}', R),
    ('\u{649}', '\u{64a}', D),
    ('\u{64b}', '\u{65f}', T),
    ('\u{66e}', '\u{66f}', D),
    ('\u{670}', '\u{670}', T),
    ('\u{671}', '\u{673}', R),
    ('\u{675}', '\u{677}', R),
    ('\u{678}', '\u{687}', D),
    ('\u{688}', '\u{699}', R),
    ('\u{69a}', '\u{6bf}', D),
    ('\u{6c0}', '\u{6c0}', R),
    ('\u{6c1}', '\u{6c2}', D),
    ('\u{6c3}', '\u{6cb}', R),
    ('\u{6cc}', '\u{6cc}', D),
    ('\u{6cd}', '\u{6cd}', R),
    ('\u{6ce}', '\u{6ce}', D),
    ('\u{6cf}', '\u{6cf}', R),
    ('\u{6d0}', '\u{6d1}', D),
    ('\u{6d2}', '\u{6d3}', R),
    ('\u{6d5}', '\u{6d5}', R),
    ('\u{6d6}', '\u{6dc}', T),
    ('\u{6df}', '\u{6e4}', T),
    ('\u{6e7}', '\u{6e8}', T),
    ('\u{6ea}', '\u{6ed}', T),
    ('\u{6ee}', '\u{6ef}', R),
    ('\u{6fa}', '\u{6fc}', D),
    ('\u{6ff}', '\u{6ff}', D),
    ('\u{70f}', '\u{70f}', T),
    ('\u{710}', '\u{710}', R),
    ('\u{711}', '\u{711}', T),
    ('\u{712}', '\u{714}', D),
    ('\u{715}', '\u{719}', R),
    ('\u{71a}', '\u{71d}', D),
    ('\u{71e}', '\u{71e}', R),
    ('\u{71f}', '\u{727}', D),
    ('\u{728}', '\u{728}', R),
    ('\u{729}', '\u{729}', D),
    ('\u{72a}', '\u{72a}', R),
    ('\u{72b}', '\u{72b}', D),
    ('\u{72c}', '\u{72c}', R),
    ('\u{72d}', '\u{72e}', D),
    ('\u{72f}', '\u{72f}', R),
    ('\u{730}', '\u{74a}', T),
    ('\u{74d}', '\u{74d}', R),
    ('\u{74e}', '\u{758}', D),
    ('\u{759}', '\u{75b}', R),
    ('\u{75c}', '\u{76a}', D),
    ('\u{76b}', '\u{76c}', R),
    ('\u{76d}', '\u{770}', D),
    ('\u{771}', '\u{771}', R),
    ('\u{772}', '\u{772}', D),
    ('\u{773}', '\u{774}', R),
    ('\u{775}', '\u{777}', D),
    ('\u{778}', '\u{779}', R),
    ('\u{77a}', '\u{77f}', D),
    ('\u{7a6}', '\u{7b0}', T),
    ('\u{7ca}', '\u{7ea}', D),
    ('\u{7eb}', '\u{7f3}', T),
    ('\u{7fa}', '\u{7fa}', C),
    ('\u{7fd}', '\u{7fd}', T),
    ('\u{816}', '\u{819}', T),
    ('\u{81b}', '\u{823}', T),
    ('\u{825}', '\u{827}', T),
    ('\u{829}', '\u{82d}', T),
    ('\u{840}', '\u{840}', R),
    ('\u{841}', '\u{845}', D),
    ('\u{846}', '\u{847}', R),
    ('\u{848}', '\u{848}', D),
    ('\u{849}', '\u{849}', R),
    ('\u{84a}', '\u{853}', D),
    ('\u{854}', '\u{854}', R),
    ('\u{855}', '\u{855}', D),
    ('\u{856}', '\u{858}', R),
    ('\u{859}', '\u{85b}', T),
    ('\u{860}', '\u{860}', D),
    ('\u{862}', '\u{865}', D),
    ('\u{867}', '\u{867}', R),
    ('\u{868}', '\u{868}', D),
    ('\u{869}', '\u{86a}', R),
    ('\u{870}', '\u{882}', R),
    ('\u{883}', '\u{885}', C),
    ('\u{886}', '\u{886}', D),
    ('\u{889}', '\u{88d}', D),
    ('\u{88e}', '\u{88e}', R),
    ('\u{88f}', '\u{88f}', D),
    ('\u{897}', '\u{89f}', T),
    ('\u{8a0}', '\u{8a9}', D),
    ('\u{8aa}', '\u{8ac}', R),
    ('\u{8ae}', '\u{8ae}', R),
    ('\u{8af}', '\u{8b0}', D),
    ('\u{8b1}', '\u{8b2}', R),
    ('\u{8b3}', '\u{8b8}', D),
    ('\u{8b9}', '\u{8b9}', R),
    ('\u{8ba}', '\u{8c8}', D),
    ('\u{8ca}', '\u{8e1}', T),
    ('\u{8e3}', '\u{902}', T),
    ('\u{93a}', '\u{93a}', T),
    ('\u{93c}', '\u{93c}', T),
    ('\u{941}', '\u{948}', T),
    ('\u{94d}', '\u{94d}', T),
    ('\u{951}', '\u{957}', T),
    ('\u{962}', '\u{963}', T),
    ('\u{981}', '\u{981}', T),
    ('\u{9bc}', '\u{9bc}', T),
    ('\u{9c1}', '\u{9c4}', T),
    ('\u{9cd}', '\u{9cd}', T),
    ('\u{9e2}', '\u{9e3}', T),
    ('\u{9fe}', '\u{9fe}', T),
    ('\u{a01}', '\u{a02}', T),
    ('\u{a3c}', '\u{a3c}', T),
    ('\u{a41}', '\u{a42}', T),
    ('\u{a47}', '\u{a48}', T),
    ('\u{a4b}', '\u{a4d}', T),
    ('\u{a51}', '\u{a51}', T),
    ('\u{a70}', '\u{a71}', T),
    ('\u{a75}', '\u{a75}', T),
    ('\u{a81}', '\u{a82}', T),
    ('\u{abc}', '\u{abc}', T),
    ('\u{ac1}', '\u{ac5}', T),
    ('\u{ac7}', '\u{ac8}', T),
    ('\u{acd}', '\u{acd}', T),
    ('\u{ae2}', '\u{ae3}', T),
    ('\u{afa}', '\u{aff}', T),
    ('\u{b01}', '\u{b01}', T),
    ('\u{b3c}', '\u{b3c}', T),
    ('\u{b3f}', '\u{b3f}', T),
    ('\u{b41}', '\u{b44}', T),
    ('\u{b4d}', '\u{b4d}', T),
    ('\u{b55}', '\u{b56}', T),
    ('\u{b62}', '\u{b63}', T),
    ('\u{b82}', '\u{b82}', T),
    ('\u{bc0}', '\u{bc0}', T),
    ('\u{bcd}', '\u{bcd}', T),
    ('\u{c00}', '\u{c00}', T),
    ('\u{c04}', '\u{c04}', T),
    ('\u{c3c}', '\u{c3c}', T),
    ('\u{c3e}', '\u{c40}', T),
    ('\u{c46}', '\u{c48}', T),
    ('\u{c4a}', '\u{c4d}', T),
    ('\u{c55}', '\u{c56}', T),
    ('\u{c62}', '\u{c63}', T),
    ('\u{c81}', '\u{c81}', T),
    ('\u{cbc}', '\u{cbc}', T),
    ('\u{cbf}', '\u{cbf}', T),
    ('\u{cc6}', '\u{cc6}', T),
    ('\u{ccc}', '\u{ccd}', T),
    ('\u{ce2}', '\u{ce3}', T),
    ('\u{d00}', '\u{d01}', T),
    ('\u{d3b}', '\u{d3c}', T),
    ('\u{d41}', '\u{d44}', T),
    ('\u{d4d}', '\u{d4d}', T),
    ('\u{d62}', '\u{d63}', T),
    ('\u{d81}', '\u{d81}', T),
    ('\u{dca}', '\u{dca}', T),
    ('\u{dd2}', '\u{dd4}', T),
    ('\u{dd6}', '\u{dd6}', T),
    ('\u{e31}', '\u{e31}', T),
    ('\u{e34}', '\u{e3a}', T),
    ('\u{e47}', '\u{e4e}', T),
    ('\u{eb1}', '\u{eb1}', T),
    ('\u{eb4}', '\u{ebc}', T),
    ('\u{ec8}', '\u{ece}', T),
    ('\u{f18}', '\u{f19}', T),
    ('\u{f35}', '\u{f35}', T),
    ('\u{f37}', '\u{f37}', T),
    ('\u{f39}', '\u{f39}', T),
    ('\u{f71}', '\u{f7e}', T),
    ('\u{f80}', '\u{f84}', T),
    ('\u{f86}', '\u{f87}', T),
    ('\u{f8d}', '\u{f97}', T),
    ('\u{f99}', '\u{fbc}', T),
    ('\u{fc6}', '\u{fc6}', T),
    ('\u{102d}', '\u{1030}', T),
    ('\u{1032}', '\u{1037}', T),
    ('\u{1039}', '\u{103a}', T),
    ('\u{103d}', '\u{103e}', T),
    ('\u{1058}', '\u{1059}', T),
    ('\u{105e}', '\u{1060}', T),
    ('\u{1071}', '\u{1074}', T),
    ('\u{1082}', '\u{1082}', T),
    ('\u{1085}', '\u{1086}', T),
    ('\u{108d}', '\u{108d}', T),
    ('\u{109d}', '\u{109d}', T),
    ('\u{135d}', '\u{135f}', T),
    ('\u{1712}', '\u{1714}', T),
    ('\u{1732}', '\u{1733}', T),
    ('\u{1752}', '\u{1753}', T),
    ('\u{1772}', '\u{1773}', T),
    ('\u{17b4}', '\u{17b5}', T),
    ('\u{17b7}', '\u{17bd}', T),
    ('\u{17c6}', '\u{17c6}', T),
    ('\u{17c9}', '\u{17d3}', T),
    ('\u{17dd}', '\u{17dd}', T),
    ('\u{1807}', '\u{1807}', D),
    ('\u{180a}', '\u{180a}', C),
    ('\u{180b}', '\u{180d}', T),
    ('\u{180f}', '\u{180f}', T),
    ('\u{1820}', '\u{1878}', D),
    ('\u{1885}', '\u{1886}', T),
    ('\u{1887}', '\u{18a8}', D),
    ('\u{18a9}', '\u{18a9}', T),
    ('\u{18aa}', '\u{18aa}', D),
    ('\u{1920}', '\u{1922}', T),
    ('\u{1927}', '\u{1928}', T),
    ('\u{1932}', '\u{1932}', T),
    ('\u{1939}', '\u{193b}', T),
    ('\u{1a17}', '\u{1a18}', T),
    ('\u{1a1b}', '\u{1a1b}', T),
    ('\u{1a56}', '\u{1a56}', T),
    ('\u{1a58}', '\u{1a5e}', T),
    ('\u{1a60}', '\u{1a60}', T),
    ('\u{1a62}', '\u{1a62}', T),
    ('\u{1a65}', '\u{1a6c}', T),
    ('\u{1a73}', '\u{1a7c}', T),
    ('\u{1a7f}', '\u{1a7f}', T),
    ('\u{1ab0}', '\u{1add}', T),
    ('\u{1ae0}', '\u{1aeb}', T),
    ('\u{1b00}', '\u{1b03}', T),
    ('\u{1b34}', '\u{1b34}', T),
    ('\u{1b36}', '\u{1b3a}', T),
    ('\u{1b3c}', '\u{1b3c}', T),
    ('\u{1b42}', '\u{1b42}', T),
    ('\u{1b6b}', '\u{1b73}', T),
    ('\u{1b80}', '\u{1b81}', T),
    ('\u{1ba2}', '\u{1ba5}', T),
    ('\u{1ba8}', '\u{1ba9}', T),
    ('\u{1bab}', '\u{1bad}', T),
    ('\u{1be6}', '\u{1be6}', T),
    ('\u{1be8}', '\u{1be9}', T),
    ('\u{1bed}', '\u{1bed}', T),
    ('\u{1bef}', '\u{1bf1}', T),
    ('\u{1c2c}', '\u{1c33}', T),
    ('\u{1c36}', '\u{1c37}', T),
    ('\u{1cd0}', '\u{1cd2}', T),
    ('\u{1cd4}', '\u{1ce0}', T),
    ('\u{1ce2}', '\u{1ce8}', T),
    ('\u{1ced}', '\u{1ced}', T),
    ('\u{1cf4}', '\u{1cf4}', T),
    ('\u{1cf8}', '\u{1cf9}', T),
    ('\u{1dc0}', '\u{1dff}', T),
    ('\u{200b}', '\u{200b}', T),
    ('\u{200d}', '\u{200d}', C),
    ('\u{200e}', '\u{200f}', T),
    ('\u{202a}', '\u{202e}', T),
    ('\u{2060}', '\u{2064}', T),
    ('\u{206a}', '\u{206f}', T),
    ('\u{20d0}', '\u{20f0}', T),
    ('\u{2cef}', '\u{2cf1}', T),
    ('\u{2d7f}', '\u{2d7f}', T),
    ('\u{2de0}', '\u{2dff}', T),
    ('\u{302a}', '\u{302d}', T),
    ('\u{3099}', '\u{309a}', T),
    ('\u{a66f}', '\u{a672}', T),
    ('\u{a674}', '\u{a67d}', T),
    ('\u{a69e}', '\u{a69f}', T),
    ('\u{a6f0}', '\u{a6f1}', T),
    ('\u{a802}', '\u{a802}', T),
    ('\u{a806}', '\u{a806}', T),
    ('\u{a80b}', '\u{a80b}', T),
    ('\u{a825}', '\u{a826}', T),
    ('\u{a82c}', '\u{a82c}', T),
    ('\u{a840}', '\u{a871}', D),
    ('\u{a872}', '\u{a872}', L),
    ('\u{a8c4}', '\u{a8c5}', T),
    ('\u{a8e0}', '\u{a8f1}', T),
    ('\u{a8ff}', '\u{a8ff}', T),
    ('\u{a926}', '\u{a92d}', T),
    ('\u{a947}', '\u{a951}', T),
    ('\u{a980}', '\u{a982}', T),
    ('\u{a9b3}', '\u{a9b3}', T),
    ('\u{a9b6}', '\u{a9b9}', T),
    ('\u{a9bc}', '\u{a9bd}', T),
    ('\u{a9e5}', '\u{a9e5}', T),
    ('\u{aa29}', '\u{aa2e}', T),
    ('\u{aa31}', '\u{aa32}', T),
    ('\u{aa35}', '\u{aa36}', T),
    ('\u{aa43}', '\u{aa43}', T),
    ('\u{aa4c}', '\u{aa4c}', T),
    ('\u{aa7c}', '\u{aa7c}', T),
    ('\u{aab0}', '\u{aab0}', T),
    ('\u{aab2}', '\u{aab4}', T),
    ('\u{aab7}', '\u{aab8}', T),
    ('\u{aabe}', '\u{aabf}', T),
    ('\u{aac1}', '\u{aac1}', T),
    ('\u{aaec}', '\u{aaed}', T),
    ('\u{aaf6}', '\u{aaf6}', T),
    ('\u{abe5}', '\u{abe5}', T),
    ('\u{abe8}', '\u{abe8}', T),
    ('\u{abed}', '\u{abed}', T),
    ('\u{fb1e}', '\u{fb1e}', T),
    ('\u{fe00}', '\u{fe0f}', T),
    ('\u{fe20}', '\u{fe2f}', T),
    ('\u{feff}', '\u{feff}', T),
    ('\u{fff9}', '\u{fffb}', T),
    ('\u{101fd}', '\u{101fd}', T),
    ('\u{102e0}', '\u{102e0}', T),
    ('\u{10376}', '\u{1037a}', T),
    ('\u{10a01}', '\u{10a03}', T),
    ('\u{10a05}', '\u{10a06}', T),
    ('\u{10a0c}', '\u{10a0f}', T),
    ('\u{10a38}', '\u{10a3a}', T),
    ('\u{10a3f}', '\u{10a3f}', T),
    ('\u{10ac0}', '\u{10ac4}', D),
    ('\u{10ac5}', '\u{10ac5}', R),
    ('\u{10ac7}', '\u{10ac7}', R),
    ('\u{10ac9}', '\u{10aca}', R),
    ('\u{10acd}', '\u{10acd}', L),
    ('\u{10ace}', '\u{10ad2}', R),
    ('\u{10ad3}', '\u{10ad6}', D),
    ('\u{10ad7}', '\u{10ad7}', L),
    ('\u{10ad8}', '\u{10adc}', D),
    ('\u{10add}', '\u{10add}', R),
    ('\u{10ade}', '\u{10ae0}', D),
    ('\u{10ae1}', '\u{10ae1}', R),
    ('\u{10ae4}', '\u{10ae4}', R),
    ('\u{10ae5}', '\u{10ae6}', T),
    ('\u{10aeb}', '\u{10aee}', D),
    ('\u{10aef}', '\u{10aef}', R),
    ('\u{10b80}', '\u{10b80}', D),
    ('\u{10b81}', '\u{10b81}', R),
    ('\u{10b82}', '\u{10b82}', D),
    ('\u{10b83}', '\u{10b85}', R),
    ('\u{10b86}', '\u{10b88}', D),
    ('\u{10b89}', '\u{10b89}', R),
    ('\u{10b8a}', '\u{10b8b}', D),
    ('\u{10b8c}', '\u{10b8c}', R),
    ('\u{10b8d}', '\u{10b8d}', D),
    ('\u{10b8e}', '\u{10b8f}', R),
    ('\u{10b90}', '\u{10b90}', D),
    ('\u{10b91}', '\u{10b91}', R),
    ('\u{10ba9}', '\u{10bac}', R),
    ('\u{10bad}', '\u{10bae}', D),
    ('\u{10d00}', '\u{10d00}', L),
    ('\u{10d01}', '\u{10d21}', D),
    ('\u{10d22}', '\u{10d22}', R),
    ('\u{10d23}', '\u{10d23}', D),
    ('\u{10d24}', '\u{10d27}', T),
    ('\u{10d69}', '\u{10d6d}', T),
    ('\u{10eab}', '\u{10eac}', T),
    ('\u{10ec2}', '\u{10ec2}', R),
    ('\u{10ec3}', '\u{10ec4}', D),
    ('\u{10ec6}', '\u{10ec7}', D),
    ('\u{10efa}', '\u{10eff}', T),
    ('\u{10f30}', '\u{10f32}', D),
    ('\u{10f33}', '\u{10f33}', R),
    ('\u{10f34}', '\u{10f44}', D),
    ('\u{10f46}', '\u{10f50}', T),
    ('\u{10f51}', '\u{10f53}', D),
    ('\u{10f54}', '\u{10f54}', R),
    ('\u{10f70}', '\u{10f73}', D),
    ('\u{10f74}', '\u{10f75}', R),
    ('\u{10f76}', '\u{10f81}', D),
    ('\u{10f82}', '\u{10f85}', T),
    ('\u{10fb0}', '\u{10fb0}', D),
    ('\u{10fb2}', '\u{10fb3}', D),
    ('\u{10fb4}', '\u{10fb6}', R),
    ('\u{10fb8}', '\u{10fb8}', D),
    ('\u{10fb9}', '\u{10fba}', R),
    ('\u{10fbb}', '\u{10fbc}', D),
    ('\u{10fbd}', '\u{10fbd}', R),
    ('\u{10fbe}', '\u{10fbf}', D),
    ('\u{10fc1}', '\u{10fc1}', D),
    ('\u{10fc2}', '\u{10fc3}', R),
    ('\u{10fc4}', '\u{10fc4}', D),
    ('\u{10fc9}', '\u{10fc9}', R),
    ('\u{10fca}', '\u{10fca}', D),
    ('\u{10fcb}', '\u{10fcb}', L),
    ('\u{11001}', '\u{11001}', T),
    ('\u{11038}', '\u{11046}', T),
    ('\u{11070}', '\u{11070}', T),
    ('\u{11073}', '\u{11074}', T),
    ('\u{1107f}', '\u{11081}', T),
    ('\u{110b3}', '\u{110b6}', T),
    ('\u{110b9}', '\u{110ba}', T),
    ('\u{110c2}', '\u{110c2}', T),
    ('\u{11100}', '\u{11102}', T),
    ('\u{11127}', '\u{1112b}', T),
    ('\u{1112d}', '\u{11134}', T),
    ('\u{11173}', '\u{11173}', T),
    ('\u{11180}', '\u{11181}', T),
    ('\u{111b6}', '\u{111be}', T),
    ('\u{111c9}', '\u{111cc}', T),
    ('\u{111cf}', '\u{111cf}', T),
    ('\u{1122f}', '\u{11231}', T),
    ('\u{11234}', '\u{11234}', T),
    ('\u{11236}', '\u{11237}', T),
    ('\u{1123e}', '\u{1123e}', T),
    ('\u{11241}', '\u{11241}', T),
    ('\u{112df}', '\u{112df}', T),
    ('\u{112e3}', '\u{112ea}', T),
    ('\u{11300}', '\u{11301}', T),
    ('\u{1133b}', '\u{1133c}', T),
    ('\u{11340}', '\u{11340}', T),
    ('\u{11366}', '\u{1136c}', T),
    ('\u{11370}', '\u{11374}', T),
    ('\u{113bb}', '\u{113c0}', T),
    ('\u{113ce}', '\u{113ce}', T),
    ('\u{113d0}', '\u{113d0}', T),
    ('\u{113d2}', '\u{113d2}', T),
    ('\u{113e1}', '\u{113e2}', T),
    ('\u{11438}', '\u{1143f}', T),
    ('\u{11442}', '\u{11444}', T),
    ('\u{11446}', '\u{11446}', T),
    ('\u{1145e}', '\u{1145e}', T),
    ('\u{114b3}', '\u{114b8}', T),
    ('\u{114ba}', '\u{114ba}', T),
    ('\u{114bf}', '\u{114c0}', T),
    ('\u{114c2}', '\u{114c3}', T),
    ('\u{115b2}', '\u{115b5}', T),
    ('\u{115bc}', '\u{115bd}', T),
    ('\u{115bf}', '\u{115c0}', T),
    ('\u{115dc}', '\u{115dd}', T),
    ('\u{11633}', '\u{1163a}', T),
    ('\u{1163d}', '\u{1163d}', T),
    ('\u{1163f}', '\u{11640}', T),
    ('\u{116ab}', '\u{116ab}', T),
    ('\u{116ad}', '\u{116ad}', T),
    ('\u{116b0}', '\u{116b5}', T),
    ('\u{116b7}', '\u{116b7}', T),
    ('\u{1171d}', '\u{1171d}', T),
    ('\u{1171f}', '\u{1171f}', T),
    ('\u{11722}', '\u{11725}', T),
    ('\u{11727}', '\u{1172b}', T),
    ('\u{1182f}', '\u{11837}', T),
    ('\u{11839}', '\u{1183a}', T),
    ('\u{1193b}', '\u{1193c}', T),
    ('\u{1193e}', '\u{1193e}', T),
    ('\u{11943}', '\u{11943}', T),
    ('\u{119d4}', '\u{119d7}', T),
    ('\u{119da}', '\u{119db}', T),
    ('\u{119e0}', '\u{119e0}', T),
    ('\u{11a01}', '\u{11a0a}', T),
    ('\u{11a33}', '\u{11a38}', T),
    ('\u{11a3b}', '\u{11a3e}', T),
    ('\u{11a47}', '\u{11a47}', T),
    ('\u{11a51}', '\u{11a56}', T),
    ('\u{11a59}', '\u{11a5b}', T),
    ('\u{11a8a}', '\u{11a96}', T),
    ('\u{11a98}', '\u{11a99}', T),
    ('\u{11b60}', '\u{11b60}', T),
    ('\u{11b62}', '\u{11b64}', T),
    ('\u{11b66}', '\u{11b66}', T),
    ('\u{11c30}', '\u{11c36}', T),
    ('\u{11c38}', '\u{11c3d}', T),
    ('\u{11c3f}', '\u{11c3f}', T),
    ('\u{11c92}', '\u{11ca7}', T),
    ('\u{11caa}', '\u{11cb0}', T),
    ('\u{11cb2}', '\u{11cb3}', T),
    ('\u{11cb5}', '\u{11cb6}', T),
    ('\u{11d31}', '\u{11d36}', T),
    ('\u{11d3a}', '\u{11d3a}', T),
    ('\u{11d3c}', '\u{11d3d}', T),
    ('\u{11d3f}', '\u{11d45}', T),
    ('\u{11d47}', '\u{11d47}', T),
    ('\u{11d90}', '\u{11d91}', T),
    ('\u{11d95}', '\u{11d95}', T),
    ('\u{11d97}', '\u{11d97}', T),
    ('\u{11ef3}', '\u{11ef4}', T),
    ('\u{11f00}', '\u{11f01}', T),
    ('\u{11f36}', '\u{11f3a}', T),
    ('\u{11f40}', '\u{11f40}', T),
    ('\u{11f42}', '\u{11f42}', T),
    ('\u{11f5a}', '\u{11f5a}', T),
    ('\u{13430}', '\u{13440}', T),
    ('\u{13447}', '\u{13455}', T),
    ('\u{1611e}', '\u{16129}', T),
    ('\u{1612d}', '\u{1612f}', T),
    ('\u{16af0}', '\u{16af4}', T),
    ('\u{16b30}', '\u{16b36}', T),
    ('\u{16f4f}', '\u{16f4f}', T),
    ('\u{16f8f}', '\u{16f92}', T),
    ('\u{16fe4}', '\u{16fe4}', T),
    ('\u{1bc9d}', '\u{1bc9e}', T),
    ('\u{1bca0}', '\u{1bca3}', T),
    ('\u{1cf00}', '\u{1cf2d}', T),
    ('\u{1cf30}', '\u{1cf46}', T),
    ('\u{1d167}', '\u{1d169}', T),
    ('\u{1d173}', '\u{1d182}', T),
    ('\u{1d185}', '\u{1d18b}', T),
    ('\u{1d1aa}', '\u{1d1ad}', T),
    ('\u{1d242}', '\u{1d244}', T),
    ('\u{1da00}', '\u{1da36}', T),
    ('\u{1da3b}', '\u{1da6c}', T),
    ('\u{1da75}', '\u{1da75}', T),
    ('\u{1da84}', '\u{1da84}', T),
    ('\u{1da9b}', '\u{1da9f}', T),
    ('\u{1daa1}', '\u{1daaf}', T),
    ('\u{1e000}', '\u{1e006}', T),
    ('\u{1e008}', '\u{1e018}', T),
    ('\u{1e01b}', '\u{1e021}', T),
    ('\u{1e023}', '\u{1e024}', T),
    ('\u{1e026}', '\u{1e02a}', T),
    ('\u{1e08f}', '\u{1e08f}', T),
    ('\u{1e130}', '\u{1e136}', T),
    ('\u{1e2ae}', '\u{1e2ae}', T),
    ('\u{1e2ec}', '\u{1e2ef}', T),
    ('\u{1e4ec}', '\u{1e4ef}', T),
    ('\u{1e5ee}', '\u{1e5ef}', T),
    ('\u{1e6e3}', '\u{1e6e3}', T),
    ('\u{1e6e6}', '\u{1e6e6}', T),
    ('\u{1e6ee}', '\u{1e6ef}', T),
    ('\u{1e6f5}', '\u{1e6f5}', T),
    ('\u{1e8d0}', '\u{1e8d6}', T),
    ('\u{1e900}', '\u{1e943}', D),
    ('\u{1e944}', '\u{1e94b}', T),
    ('\u{e0001}', '\u{e0001}', T),
    ('\u{e0020}', '\u{e007f}', T),
    ('\u{e0100}', '\u{e01ef}', T),
];
