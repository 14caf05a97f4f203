// Generated by scripts/make_unicode_tables.py. DO NOT EDIT.
// Source: the UTS #46 table bundled with the Python idna package.

static TABLE: &[Range] = &[
    Range { from: '\u{0}', to: '\u{2c}' },
    Range { from: '\u{2d}', to: '\u{2f}' },
    Range { from: '\u{30}', to: '\u{39}' },
    Range { from: '\u{3a}', to: '\u{40}' },
    Range { from: '\u{41}', to: '\u{5a}' },
    Range { from: '\u{5b}', to: '\u{60}' },
    Range { from: '\u{61}', to: '\u{7a}' },
    Range { from: '\u{7b}', to: '\u{7f}' },
    Range { from: '\u{80}', to: '\u{9f}' },
    Range { from: '\u{a0}', to: '\u{a0}' },
    Range { from: '\u{a1}', to: '\u{a7}' },
    Range { from: '\u{a8}', to: '\u{df}' },
    Range { from: '\u{e0}', to: '\u{ff}' },
    Range { from: '\u{100}', to: '\u{198}' },
    Range { from: '\u{199}', to: '\u{19b}' },
    Range { from: '\u{19c}', to: '\u{1b8}' },
    Range { from: '\u{1b9}', to: '\u{1bb}' },
    Range { from: '\u{1bc}', to: '\u{1bc}' },
    Range { from: '\u{1bd}', to: '\u{1c3}' },
    Range { from: '\u{1c4}', to: '\u{1c6}' },
    Range { from: '\u{1c7}', to: '\u{1c9}' },
    Range { from: '\u{1ca}', to: '\u{1cc}' },
    Range { from: '\u{1cd}', to: '\u{1f0}' },
    Range { from: '\u{1f1}', to: '\u{1f3}' },
    Range { from: '\u{1f4}', to: '\u{232}' },
    Range { from: '\u{233}', to: '\u{239}' },
    Range { from: '\u{23a}', to: '\u{24e}' },
    Range { from: '\u{24f}', to: '\u{2af}' },
    Range { from: '\u{2b0}', to: '\u{2b8}' },
    Range { from: '\u{2b9}', to: '\u{2d7}' },
    Range { from: '\u{2d8}', to: '\u{2e4}' },
    Range { from: '\u{2e5}', to: '\u{33f}' },
    Range { from: '\u{340}', to: '\u{345}' },
    Range { from: '\u{346}', to: '\u{34e}' },
    Range { from: '\u{34f}', to: '\u{34f}' },
    Range { from: '\u{350}', to: '\u{36f}' },
    Range { from: '\u{370}', to: '\u{37a}' },
    Range { from: '\u{37b}', to: '\u{37d}' },
    Range { from: '\u{37e}', to: '\u{37f}' },
    Range { from: '\u{380}', to: '\u{383}' },
    Range { from: '\u{384}', to: '\u{3ab}' },
    Range { from: '\u{3ac}', to: '\u{3c1}' },
    Range { from: '\u{3c2}', to: '\u{3c2}' },
    Range { from: '\u{3c3}', to: '\u{3ce}' },
    Range { from: '\u{3cf}', to: '\u{42f}' },
    Range { from: '\u{430}', to: '\u{45f}' },
    Range { from: '\u{460}', to: '\u{480}' },
    Range { from: '\u{481}', to: '\u{489}' },
    Range { from: '\u{48a}', to: '\u{558}' },
    Range { from: '\u{559}', to: '\u{586}' },
    Range { from: '\u{587}', to: '\u{587}' },
    Range { from: '\u{588}', to: '\u{58a}' },
    Range { from: '\u{58b}', to: '\u{58c}' },
    Range { from: '\u{58d}', to: '\u{58f}' },
    Range { from: '\u{590}', to: '\u{590}' },
    Range { from: '\u{591}', to: '\u{5c7}' },
    Range { from: '\u{5c8}', to: '\u{5cf}' },
    Range { from: '\u{5d0}', to: '\u{5ea}' },
    Range { from: '\u{5eb}', to: '\u{5ee}' },
    Range { from: '\u{5ef}', to: '\u{5f4}' },
    Range { from: '\u{5f5}', to: '\u{605}' },
    Range { from: '\u{606}', to: '\u{61b}' },
    Range { from: '\u{61c}', to: '\u{61c}' },
    Range { from: '\u{61d}', to: '\u{674}' },
    Range { from: '\u{675}', to: '\u{678}' },
    Range { from: '\u{679}', to: '\u{6dc}' },
    Range { from: '\u{6dd}', to: '\u{6dd}' },
    Range { from: '\u{6de}', to: '\u{70d}' },
    Range { from: '\u{70e}', to: '\u{70f}' },
    Range { from: '\u{710}', to: '\u{74a}' },
    Range { from: '\u{74b}', to: '\u{74c}' },
    Range { from: '\u{74d}', to: '\u{7b1}' },
    Range { from: '\u{7b2}', to: '\u{7bf}' },
    Range { from: '\u{7c0}', to: '\u{7fa}' },
    Range { from: '\u{7fb}', to: '\u{7fc}' },
    Range { from: '\u{7fd}', to: '\u{82d}' },
    Range { from: '\u{82e}', to: '\u{82f}' },
    Range { from: '\u{830}', to: '\u{83e}' },
    Range { from: '\u{83f}', to: '\u{83f}' },
    Range { from: '\u{840}', to: '\u{85b}' },
    Range { from: '\u{85c}', to: '\u{85f}' },
    Range { from: '\u{860}', to: '\u{86a}' },
    Range { from: '\u{86b}', to: '\u{86f}' },
    Range { from: '\u{870}', to: '\u{88f}' },
    Range { from: '\u{890}', to: '\u{896}' },
    Range { from: '\u{897}', to: '\u{8e1}' },
    Range { from: '\u{8e2}', to: '\u{8e2}' },
    Range { from: '\u{8e3}', to: '\u{957}' },
    Range { from: '\u{958}', to: '\u{95f}' },
    Range { from: '\u{960}', to: '\u{983}' },
    Range { from: '\u{984}', to: '\u{984}' },
    Range { from: '\u{985}', to: '\u{98c}' },
    Range { from: '\u{98d}', to: '\u{992}' },
    Range { from: '\u{993}', to: '\u{9a8}' },
    Range { from: '\u{9a9}', to: '\u{9a9}' },
    Range { from: '\u{9aa}', to: '\u{9b0}' },
    Range { from: '\u{9b1}', to: '\u{9b2}' },
    Range { from: '\u{9b3}', to: '\u{9b5}' },
    Range { from: '\u{9b6}', to: '\u{9b9}' },
    Range { from: '\u{9ba}', to: '\u{9bb}' },
    Range { from: '\u{9bc}', to: '\u{9c4}' },
    Range { from: '\u{9c5}', to: '\u{9ca}' },
    Range { from: '\u{9cb}', to: '\u{9ce}' },
    Range { from: '\u{9cf}', to: '\u{9d6}' },
    Range { from: '\u{9d7}', to: '\u{9d7}' },
    Range { from: '\u{9d8}', to: '\u{9db}' },
    Range { from: '\u{9dc}', to: '\u{9df}' },
    Range { from: '\u{9e0}', to: '\u{9e3}' },
    Range { from: '\u{9e4}', to: '\u{9e5}' },
    Range { from: '\u{9e6}', to: '\u{9fe}' },
    Range { from: '\u{9ff}', to: '\u{a00}' },
    Range { from: '\u{a01}', to: '\u{a03}' },
    Range { from: '\u{a04}', to: '\u{a04}' },
    Range { from: '\u{a05}', to: '\u{a0a}' },
    Range { from: '\u{a0b}', to: '\u{a0e}' },
    Range { from: '\u{a0f}', to: '\u{a12}' },
    Range { from: '\u{a13}', to: '\u{a28}' },
    Range { from: '\u{a29}', to: '\u{a29}' },
    Range { from: '\u{a2a}', to: '\u{a30}' },
    Range { from: '\u{a31}', to: '\u{a3d}' },
    Range { from: '\u{a3e}', to: '\u{a42}' },
    Range { from: '\u{a43}', to: '\u{a46}' },
    Range { from: '\u{a47}', to: '\u{a4a}' },
    Range { from: '\u{a4b}', to: '\u{a4d}' },
    Range { from: '\u{a4e}', to: '\u{a50}' },
    Range { from: '\u{a51}', to: '\u{a51}' },
    Range { from: '\u{a52}', to: '\u{a58}' },
    Range { from: '\u{a59}', to: '\u{a5e}' },
    Range { from: '\u{a5f}', to: '\u{a65}' },
    Range { from: '\u{a66}', to: '\u{a76}' },
    Range { from: '\u{a77}', to: '\u{a80}' },
    Range { from: '\u{a81}', to: '\u{a83}' },
    Range { from: '\u{a84}', to: '\u{a84}' },
    Range { from: '\u{a85}', to: '\u{a8d}' },
    Range { from: '\u{a8e}', to: '\u{a8e}' },
    Range { from: '\u{a8f}', to: '\u{a91}' },
    Range { from: '\u{a92}', to: '\u{a92}' },
    Range { from: '\u{a93}', to: '\u{aa8}' },
    Range { from: '\u{aa9}', to: '\u{aa9}' },
    Range { from: '\u{aaa}', to: '\u{ab0}' },
    Range { from: '\u{ab1}', to: '\u{ab4}' },
    Range { from: '\u{ab5}', to: '\u{ab9}' },
    Range { from: '\u{aba}', to: '\u{abb}' },
    Range { from: '\u{abc}', to: '\u{ac5}' },
    Range { from: '\u{ac6}', to: '\u{ac6}' },
    Range { from: '\u{ac7}', to: '\u{ac9}' },
    Range { from: '\u{aca}', to: '\u{aca}' },
    Range { from: '\u{acb}', to: '\u{acd}' },
    Range { from: '\u{ace}', to: '\u{ad0}' },
    Range { from: '\u{ad1}', to: '\u{adf}' },
    Range { from: '\u{ae0}', to: '\u{ae3}' },
    Range { from: '\u{ae4}', to: '\u{ae5}' },
    Range { from: '\u{ae6}', to: '\u{af1}' },
    Range { from: '\u{af2}', to: '\u{af8}' },
    Range { from: '\u{af9}', to: '\u{aff}' },
    Range { from: '\u{b00}', to: '\u{b00}' },
    Range { from: '\u{b01}', to: '\u{b03}' },
    Range { from: '\u{b04}', to: '\u{b04}' },
    Range { from: '\u{b05}', to: '\u{b0c}' },
    Range { from: '\u{b0d}', to: '\u{b12}' },
    Range { from: '\u{b13}', to: '\u{b28}' },
    Range { from: '\u{b29}', to: '\u{b29}' },
    Range { from: '\u{b2a}', to: '\u{b30}' },
    Range { from: '\u{b31}', to: '\u{b34}' },
    Range { from: '\u{b35}', to: '\u{b39}' },
    Range { from: '\u{b3a}', to: '\u{b3b}' },
    Range { from: '\u{b3c}', to: '\u{b44}' },
    Range { from: '\u{b45}', to: '\u{b4a}' },
    Range { from: '\u{b4b}', to: '\u{b4d}' },
    Range { from: '\u{b4e}', to: '\u{b54}' },
    Range { from: '\u{b55}', to: '\u{b57}' },
    Range { from: '\u{b58}', to: '\u{b5b}' },
    Range { from: '\u{b5c}', to: '\u{b5e}' },
    Range { from: '\u{b5f}', to: '\u{b63}' },
    Range { from: '\u{b64}', to: '\u{b65}' },
    Range { from: '\u{b66}', to: '\u{b77}' },
    Range { from: '\u{b78}', to: '\u{b81}' },
    Range { from: '\u{b82}', to: '\u{b84}' },
    Range { from: '\u{b85}', to: '\u{b8a}' },
    Range { from: '\u{b8b}', to: '\u{b8d}' },
    Range { from: '\u{b8e}', to: '\u{b90}' },
    Range { from: '\u{b91}', to: '\u{b91}' },
    Range { from: '\u{b92}', to: '\u{b95}' },
    Range { from: '\u{b96}', to: '\u{b98}' },
    Range { from: '\u{b99}', to: '\u{b9f}' },
    Range { from: '\u{ba0}', to: '\u{ba2}' },
    Range { from: '\u{ba3}', to: '\u{ba4}' },
    Range { from: '\u{ba5}', to: '\u{ba7}' },
    Range { from: '\u{ba8}', to: '\u{baa}' },
    Range { from: '\u{bab}', to: '\u{bad}' },
    Range { from: '\u{bae}', to: '\u{bb9}' },
    Range { from: '\u{bba}', to: '\u{bbd}' },
    Range { from: '\u{bbe}', to: '\u{bc2}' },
    Range { from: '\u{bc3}', to: '\u{bc5}' },
    Range { from: '\u{bc6}', to: '\u{bc8}' },
    Range { from: '\u{bc9}', to: '\u{bc9}' },
    Range { from: '\u{bca}', to: '\u{bcd}' },
    Range { from: '\u{bce}', to: '\u{bd0}' },
    Range { from: '\u{bd1}', to: '\u{bd6}' },
    Range { from: '\u{bd7}', to: '\u{bd7}' },
    Range { from: '\u{bd8}', to: '\u{be5}' },
    Range { from: '\u{be6}', to: '\u{bfa}' },
    Range { from: '\u{bfb}', to: '\u{bff}' },
    Range { from: '\u{c00}', to: '\u{c0c}' },
    Range { from: '\u{c0d}', to: '\u{c0d}' },
    Range { from: '\u{c0e}', to: '\u{c10}' },
    Range { from: '\u{c11}', to: '\u{c11}' },
    Range { from: '\u{c12}', to: '\u{c28}' },
    Range { from: '\u{c29}', to: '\u{c29}' },
    Range { from: '\u{c2a}', to: '\u{c39}' },
    Range { from: '\u{c3a}', to: '\u{c3b}' },
    Range { from: '\u{c3c}', to: '\u{c44}' },
    Range { from: '\u{c45}', to: '\u{c45}' },
    Range { from: '\u{c46}', to: '\u{c48}' },
    Range { from: '\u{c49}', to: '\u{c49}' },
    Range { from: '\u{c4a}', to: '\u{c4d}' },
    Range { from: '\u{c4e}', to: '\u{c54}' },
    Range { from: '\u{c55}', to: '\u{c57}' },
    Range { from: '\u{c58}', to: '\u{c5a}' },
    Range { from: '\u{c5b}', to: '\u{c5f}' },
    Range { from: '\u{c60}', to: '\u{c63}' },
    Range { from: '\u{c64}', to: '\u{c65}' },
    Range { from: '\u{c66}', to: '\u{c6f}' },
    Range { from: '\u{c70}', to: '\u{c76}' },
    Range { from: '\u{c77}', to: '\u{c8c}' },
    Range { from: '\u{c8d}', to: '\u{c8d}' },
    Range { from: '\u{c8e}', to: '\u{c90}' },
    Range { from: '\u{c91}', to: '\u{c91}' },
    Range { from: '\u{c92}', to: '\u{ca8}' },
    Range { from: '\u{ca9}', to: '\u{ca9}' },
    Range { from: '\u{caa}', to: '\u{cb3}' },
    Range { from: '\u{cb4}', to: '\u{cb4}' },
    Range { from: '\u{cb5}', to: '\u{cb9}' },
    Range { from: '\u{cba}', to: '\u{cbb}' },
    Range { from: '\u{cbc}', to: '\u{cc4}' },
    Range { from: '\u{cc5}', to: '\u{cc5}' },
    Range { from: '\u{cc6}', to: '\u{cc8}' },
    Range { from: '\u{cc9}', to: '\u{cc9}' },
    Range { from: '\u{cca}', to: '\u{ccd}' },
    Range { from: '\u{cce}', to: '\u{cd4}' },
    Range { from: '\u{cd5}', to: '\u{cd6}' },
    Range { from: '\u{cd7}', to: '\u{cdb}' },
    Range { from: '\u{cdc}', to: '\u{cde}' },
    Range { from: '\u{cdf}', to: '\u{cdf}' },
    Range { from: '\u{ce0}', to: '\u{ce3}' },
    Range { from: '\u{ce4}', to: '\u{ce5}' },
    Range { from: '\u{ce6}', to: '\u{cef}' },
    Range { from: '\u{cf0}', to: '\u{cf0}' },
    Range { from: '\u{cf1}', to: '\u{cf3}' },
    Range { from: '\u{cf4}', to: '\u{cff}' },
    Range { from: '\u{d00}', to: '\u{d0c}' },
    Range { from: '\u{d0d}', to: '\u{d0d}' },
    Range { from: '\u{d0e}', to: '\u{d10}' },
    Range { from: '\u{d11}', to: '\u{d11}' },
    Range { from: '\u{d12}', to: '\u{d44}' },
    Range { from: '\u{d45}', to: '\u{d45}' },
    Range { from: '\u{d46}', to: '\u{d48}' },
    Range { from: '\u{d49}', to: '\u{d49}' },
    Range { from: '\u{d4a}', to: '\u{d4f}' },
    Range { from: '\u{d50}', to: '\u{d53}' },
    Range { from: '\u{d54}', to: '\u{d63}' },
    Range { from: '\u{d64}', to: '\u{d65}' },
    Range { from: '\u{d66}', to: '\u{d7f}' },
    Range { from: '\u{d80}', to: '\u{d80}' },
    Range { from: '\u{d81}', to: '\u{d83}' },
    Range { from: '\u{d84}', to: '\u{d84}' },
    Range { from: '\u{d85}', to: '\u{d96}' },
    Range { from: '\u{d97}', to: '\u{d99}' },
    Range { from: '\u{d9a}', to: '\u{db1}' },
    Range { from: '\u{db2}', to: '\u{db2}' },
    Range { from: '\u{db3}', to: '\u{dbb}' },
    Range { from: '\u{dbc}', to: '\u{dbf}' },
    Range { from: '\u{dc0}', to: '\u{dc6}' },
    Range { from: '\u{dc7}', to: '\u{dc9}' },
    Range { from: '\u{dca}', to: '\u{dca}' },
    Range { from: '\u{dcb}', to: '\u{dce}' },
    Range { from: '\u{dcf}', to: '\u{dd4}' },
    Range { from: '\u{dd5}', to: '\u{dd7}' },
    Range { from: '\u{dd8}', to: '\u{ddf}' },
    Range { from: '\u{de0}', to: '\u{de5}' },
    Range { from: '\u{de6}', to: '\u{def}' },
    Range { from: '\u{df0}', to: '\u{df1}' },
    Range { from: '\u{df2}', to: '\u{df4}' },
    Range { from: '\u{df5}', to: '\u{e00}' },
    Range { from: '\u{e01}', to: '\u{e32}' },
    Range { from: '\u{e33}', to: '\u{e33}' },
    Range { from: '\u{e34}', to: '\u{e3a}' },
    Range { from: '\u{e3b}', to: '\u{e3e}' },
    Range { from: '\u{e3f}', to: '\u{e5b}' },
    Range { from: '\u{e5c}', to: '\u{e80}' },
    Range { from: '\u{e81}', to: '\u{e85}' },
    Range { from: '\u{e86}', to: '\u{e8a}' },
    Range { from: '\u{e8b}', to: '\u{e8b}' },
    Range { from: '\u{e8c}', to: '\u{ea3}' },
    Range { from: '\u{ea4}', to: '\u{ea6}' },
    Range { from: '\u{ea7}', to: '\u{eb2}' },
    Range { from: '\u{eb3}', to: '\u{eb3}' },
    Range { from: '\u{eb4}', to: '\u{ebd}' },
    Range { from: '\u{ebe}', to: '\u{ebf}' },
    Range { from: '\u{ec0}', to: '\u{ec4}' },
    Range { from: '\u{ec5}', to: '\u{ec7}' },
    Range { from: '\u{ec8}', to: '\u{ece}' },
    Range { from: '\u{ecf}', to: '\u{ecf}' },
    Range { from: '\u{ed0}', to: '\u{ed9}' },
    Range { from: '\u{eda}', to: '\u{edf}' },
    Range { from: '\u{ee0}', to: '\u{eff}' },
    Range { from: '\u{f00}', to: '\u{f0b}' },
    Range { from: '\u{f0c}', to: '\u{f0c}' },
    Range { from: '\u{f0d}', to: '\u{f42}' },
    Range { from: '\u{f43}', to: '\u{f43}' },
    Range { from: '\u{f44}', to: '\u{f47}' },
    Range { from: '\u{f48}', to: '\u{f48}' },
    Range { from: '\u{f49}', to: '\u{f4c}' },
    Range { from: '\u{f4d}', to: '\u{f4d}' },
    Range { from: '\u{f4e}', to: '\u{f51}' },
    Range { from: '\u{f52}', to: '\u{f52}' },
    Range { from: '\u{f53}', to: '\u{f56}' },
    Range { from: '\u{f57}', to: '\u{f57}' },
    Range { from: '\u{f58}', to: '\u{f5b}' },
    Range { from: '\u{f5c}', to: '\u{f5c}' },
    Range { from: '\u{f5d}', to: '\u{f68}' },
    Range { from: '\u{f69}', to: '\u{f69}' },
    Range { from: '\u{f6a}', to: '\u{f6c}' },
    Range { from: '\u{f6d}', to: '\u{f70}' },
    Range { from: '\u{f71}', to: '\u{f79}' },
    Range { from: '\u{f7a}', to: '\u{f80}' },
    Range { from: '\u{f81}', to: '\u{f81}' },
    Range { from: '\u{f82}', to: '\u{f92}' },
    Range { from: '\u{f93}', to: '\u{f93}' },
    Range { from: '\u{f94}', to: '\u{f97}' },
    Range { from: '\u{f98}', to: '\u{f98}' },
    Range { from: '\u{f99}', to: '\u{f9c}' },
    Range { from: '\u{f9d}', to: '\u{f9d}' },
    Range { from: '\u{f9e}', to: '\u{fa1}' },
    Range { from: '\u{fa2}', to: '\u{fa2}' },
    Range { from: '\u{fa3}', to: '\u{fa6}' },
    Range { from: '\u{fa7}', to: '\u{fa7}' },
    Range { from: '\u{fa8}', to: '\u{fab}' },
    Range { from: '\u{fac}', to: '\u{fac}' },
    Range { from: '\u{fad}', to: '\u{fb8}' },
    Range { from: '\u{fb9}', to: '\u{fb9}' },
    Range { from: '\u{fba}', to: '\u{fbc}' },
    Range { from: '\u{fbd}', to: '\u{fbd}' },
    Range { from: '\u{fbe}', to: '\u{fcc}' },
    Range { from: '\u{fcd}', to: '\u{fcd}' },
    Range { from: '\u{fce}', to: '\u{fda}' },
    Range { from: '\u{fdb}', to: '\u{fff}' },
    Range { from: '\u{1000}', to: '\u{109f}' },
    Range { from: '\u{10a0}', to: '\u{10c7}' },
    Range { from: '\u{10c8}', to: '\u{10cc}' },
    Range { from: '\u{10cd}', to: '\u{10cf}' },
    Range { from: '\u{10d0}', to: '\u{10fb}' },
    Range { from: '\u{10fc}', to: '\u{10fc}' },
    Range { from: '\u{10fd}', to: '\u{115e}' },
    Range { from: '\u{115f}', to: '\u{1160}' },
    Range { from: '\u{1161}', to: '\u{1248}' },
    Range { from: '\u{1249}', to: '\u{1249}' },
    Range { from: '\u{124a}', to: '\u{124d}' },
    Range { from: '\u{124e}', to: '\u{124f}' },
    Range { from: '\u{1250}', to: '\u{1256}' },
    Range { from: '\u{1257}', to: '\u{1259}' },
    Range { from: '\u{125a}', to: '\u{125d}' },
    Range { from: '\u{125e}', to: '\u{125f}' },
    Range { from: '\u{1260}', to: '\u{1288}' },
    Range { from: '\u{1289}', to: '\u{1289}' },
    Range { from: '\u{128a}', to: '\u{128d}' },
    Range { from: '\u{128e}', to: '\u{128f}' },
    Range { from: '\u{1290}', to: '\u{12b0}' },
    Range { from: '\u{12b1}', to: '\u{12b1}' },
    Range { from: '\u{12b2}', to: '\u{12b5}' },
    Range { from: '\u{12b6}', to: '\u{12b7}' },
    Range { from: '\u{12b8}', to: '\u{12be}' },
    Range { from: '\u{12bf}', to: '\u{12c1}' },
    Range { from: '\u{12c2}', to: '\u{12c5}' },
    Range { from: '\u{12c6}', to: '\u{12c7}' },
    Range { from: '\u{12c8}', to: '\u{12d6}' },
    Range { from: '\u{12d7}', to: '\u{12d7}' },
    Range { from: '\u{12d8}', to: '\u{1310}' },
    Range { from: '\u{1311}', to: '\u{1311}' },
    Range { from: '\u{1312}', to: '\u{1315}' },
    Range { from: '\u{1316}', to: '\u{1317}' },
    Range { from: '\u{1318}', to: '\u{135a}' },
    Range { from: '\u{135b}', to: '\u{135c}' },
    Range { from: '\u{135d}', to: '\u{137c}' },
    Range { from: '\u{137d}', to: '\u{137f}' },
    Range { from: '\u{1380}', to: '\u{1399}' },
    Range { from: '\u{139a}', to: '\u{139f}' },
    Range { from: '\u{13a0}', to: '\u{13f5}' },
    Range { from: '\u{13f6}', to: '\u{13ff}' },
    Range { from: '\u{1400}', to: '\u{167f}' },
    Range { from: '\u{1680}', to: '\u{1680}' },
    Range { from: '\u{1681}', to: '\u{169c}' },
    Range { from: '\u{169d}', to: '\u{169f}' },
    Range { from: '\u{16a0}', to: '\u{16f8}' },
    Range { from: '\u{16f9}', to: '\u{16ff}' },
    Range { from: '\u{1700}', to: '\u{1715}' },
    Range { from: '\u{1716}', to: '\u{171e}' },
    Range { from: '\u{171f}', to: '\u{1736}' },
    Range { from: '\u{1737}', to: '\u{173f}' },
    Range { from: '\u{1740}', to: '\u{1753}' },
    Range { from: '\u{1754}', to: '\u{175f}' },
    Range { from: '\u{1760}', to: '\u{176c}' },
    Range { from: '\u{176d}', to: '\u{176d}' },
    Range { from: '\u{176e}', to: '\u{1770}' },
    Range { from: '\u{1771}', to: '\u{1773}' },
    Range { from: '\u{1774}', to: '\u{177f}' },
    Range { from: '\u{1780}', to: '\u{17b3}' },
    Range { from: '\u{17b4}', to: '\u{17b5}' },
    Range { from: '\u{17b6}', to: '\u{17dd}' },
    Range { from: '\u{17de}', to: '\u{17df}' },
    Range { from: '\u{17e0}', to: '\u{17e9}' },
    Range { from: '\u{17ea}', to: '\u{17ef}' },
    Range { from: '\u{17f0}', to: '\u{17f9}' },
    Range { from: '\u{17fa}', to: '\u{17ff}' },
    Range { from: '\u{1800}', to: '\u{180a}' },
    Range { from: '\u{180b}', to: '\u{180f}' },
    Range { from: '\u{1810}', to: '\u{1819}' },
    Range { from: '\u{181a}', to: '\u{181f}' },
    Range { from: '\u{1820}', to: '\u{1878}' },
    Range { from: '\u{1879}', to: '\u{187f}' },
    Range { from: '\u{1880}', to: '\u{18aa}' },
    Range { from: '\u{18ab}', to: '\u{18af}' },
    Range { from: '\u{18b0}', to: '\u{18f5}' },
    Range { from: '\u{18f6}', to: '\u{18ff}' },
    Range { from: '\u{1900}', to: '\u{191e}' },
    Range { from: '\u{191f}', to: '\u{191f}' },
    Range { from: '\u{1920}', to: '\u{192b}' },
    Range { from: '\u{192c}', to: '\u{192f}' },
    Range { from: '\u{1930}', to: '\u{193b}' },
    Range { from: '\u{193c}', to: '\u{193f}' },
    Range { from: '\u{1940}', to: '\u{1940}' },
    Range { from: '\u{1941}', to: '\u{1943}' },
    Range { from: '\u{1944}', to: '\u{196d}' },
    Range { from: '\u{196e}', to: '\u{196f}' },
    Range { from: '\u{1970}', to: '\u{1974}' },
    Range { from: '\u{1975}', to: '\u{197f}' },
    Range { from: '\u{1980}', to: '\u{19ab}' },
    Range { from: '\u{19ac}', to: '\u{19af}' },
    Range { from: '\u{19b0}', to: '\u{19c9}' },
    Range { from: '\u{19ca}', to: '\u{19cf}' },
    Range { from: '\u{19d0}', to: '\u{19da}' },
    Range { from: '\u{19db}', to: '\u{19dd}' },
    Range { from: '\u{19de}', to: '\u{1a1b}' },
    Range { from: '\u{1a1c}', to: '\u{1a1d}' },
    Range { from: '\u{1a1e}', to: '\u{1a5e}' },
    Range { from: '\u{1a5f}', to: '\u{1a5f}' },
    Range { from: '\u{1a60}', to: '\u{1a7c}' },
    Range { from: '\u{1a7d}', to: '\u{1a7e}' },
    Range { from: '\u{1a7f}', to: '\u{1a89}' },
    Range { from: '\u{1a8a}', to: '\u{1a8f}' },
    Range { from: '\u{1a90}', to: '\u{1a99}' },
    Range { from: '\u{1a9a}', to: '\u{1a9f}' },
    Range { from: '\u{1aa0}', to: '\u{1aad}' },
    Range { from: '\u{1aae}', to: '\u{1aaf}' },
    Range { from: '\u{1ab0}', to: '\u{1add}' },
    Range { from: '\u{1ade}', to: '\u{1adf}' },
    Range { from: '\u{1ae0}', to: '\u{1aeb}' },
    Range { from: '\u{1aec}', to: '\u{1aff}' },
    Range { from: '\u{1b00}', to: '\u{1b4c}' },
    Range { from: '\u{1b4d}', to: '\u{1b4d}' },
    Range { from: '\u{1b4e}', to: '\u{1bf3}' },
    Range { from: '\u{1bf4}', to: '\u{1bfb}' },
    Range { from: '\u{1bfc}', to: '\u{1c37}' },
    Range { from: '\u{1c38}', to: '\u{1c3a}' },
    Range { from: '\u{1c3b}', to: '\u{1c49}' },
    Range { from: '\u{1c4a}', to: '\u{1c4c}' },
    Range { from: '\u{1c4d}', to: '\u{1c7f}' },
    Range { from: '\u{1c80}', to: '\u{1c8a}' },
    Range { from: '\u{1c8b}', to: '\u{1c8f}' },
    Range { from: '\u{1c90}', to: '\u{1cbf}' },
    Range { from: '\u{1cc0}', to: '\u{1cc7}' },
    Range { from: '\u{1cc8}', to: '\u{1ccf}' },
    Range { from: '\u{1cd0}', to: '\u{1cfa}' },
    Range { from: '\u{1cfb}', to: '\u{1cff}' },
    Range { from: '\u{1d00}', to: '\u{1d2b}' },
    Range { from: '\u{1d2c}', to: '\u{1d6a}' },
    Range { from: '\u{1d6b}', to: '\u{1d77}' },
    Range { from: '\u{1d78}', to: '\u{1d78}' },
    Range { from: '\u{1d79}', to: '\u{1d9a}' },
    Range { from: '\u{1d9b}', to: '\u{1dbf}' },
    Range { from: '\u{1dc0}', to: '\u{1dff}' },
    Range { from: '\u{1e00}', to: '\u{1e94}' },
    Range { from: '\u{1e95}', to: '\u{1e99}' },
    Range { from: '\u{1e9a}', to: '\u{1efe}' },
    Range { from: '\u{1eff}', to: '\u{1f07}' },
    Range { from: '\u{1f08}', to: '\u{1f0f}' },
    Range { from: '\u{1f10}', to: '\u{1f15}' },
    Range { from: '\u{1f16}', to: '\u{1f1f}' },
    Range { from: '\u{1f20}', to: '\u{1f27}' },
    Range { from: '\u{1f28}', to: '\u{1f2f}' },
    Range { from: '\u{1f30}', to: '\u{1f37}' },
    Range { from: '\u{1f38}', to: '\u{1f3f}' },
    Range { from: '\u{1f40}', to: '\u{1f45}' },
    Range { from: '\u{1f46}', to: '\u{1f4f}' },
    Range { from: '\u{1f50}', to: '\u{1f57}' },
    Range { from: '\u{1f58}', to: '\u{1f5f}' },
    Range { from: '\u{1f60}', to: '\u{1f67}' },
    Range { from: '\u{1f68}', to: '\u{1fcf}' },
    Range { from: '\u{1fd0}', to: '\u{1fd2}' },
    Range { from: '\u{1fd3}', to: '\u{1fdf}' },
    Range { from: '\u{1fe0}', to: '\u{1fe2}' },
    Range { from: '\u{1fe3}', to: '\u{1fe3}' },
    Range { from: '\u{1fe4}', to: '\u{1fe7}' },
    Range { from: '\u{1fe8}', to: '\u{1fff}' },
    Range { from: '\u{2000}', to: '\u{200a}' },
    Range { from: '\u{200b}', to: '\u{2011}' },
    Range { from: '\u{2012}', to: '\u{2016}' },
    Range { from: '\u{2017}', to: '\u{2017}' },
    Range { from: '\u{2018}', to: '\u{2023}' },
    Range { from: '\u{2024}', to: '\u{2026}' },
    Range { from: '\u{2027}', to: '\u{2027}' },
    Range { from: '\u{2028}', to: '\u{202e}' },
    Range { from: '\u{202f}', to: '\u{202f}' },
    Range { from: '\u{2030}', to: '\u{2032}' },
    Range { from: '\u{2033}', to: '\u{2037}' },
    Range { from: '\u{2038}', to: '\u{203b}' },
    Range { from: '\u{203c}', to: '\u{203e}' },
    Range { from: '\u{203f}', to: '\u{2046}' },
    Range { from: '\u{2047}', to: '\u{2049}' },
    Range { from: '\u{204a}', to: '\u{2056}' },
    Range { from: '\u{2057}', to: '\u{2057}' },
    Range { from: '\u{2058}', to: '\u{205e}' },
    Range { from: '\u{205f}', to: '\u{205f}' },
    Range { from: '\u{2060}', to: '\u{2064}' },
    Range { from: '\u{2065}', to: '\u{2069}' },
    Range { from: '\u{206a}', to: '\u{206f}' },
    Range { from: '\u{2070}', to: '\u{209c}' },
    Range { from: '\u{209d}', to: '\u{209f}' },
    Range { from: '\u{20a0}', to: '\u{20a7}' },
    Range { from: '\u{20a8}', to: '\u{20a8}' },
    Range { from: '\u{20a9}', to: '\u{20c1}' },
    Range { from: '\u{20c2}', to: '\u{20cf}' },
    Range { from: '\u{20d0}', to: '\u{20f0}' },
    Range { from: '\u{20f1}', to: '\u{20ff}' },
    Range { from: '\u{2100}', to: '\u{210a}' },
    Range { from: '\u{210b}', to: '\u{210e}' },
    Range { from: '\u{210f}', to: '\u{211a}' },
    Range { from: '\u{211b}', to: '\u{211d}' },
    Range { from: '\u{211e}', to: '\u{2140}' },
    Range { from: '\u{2141}', to: '\u{2144}' },
    Range { from: '\u{2145}', to: '\u{2149}' },
    Range { from: '\u{214a}', to: '\u{214f}' },
    Range { from: '\u{2150}', to: '\u{217f}' },
    Range { from: '\u{2180}', to: '\u{2182}' },
    Range { from: '\u{2183}', to: '\u{2183}' },
    Range { from: '\u{2184}', to: '\u{2188}' },
    Range { from: '\u{2189}', to: '\u{218b}' },
    Range { from: '\u{218c}', to: '\u{218f}' },
    Range { from: '\u{2190}', to: '\u{222b}' },
    Range { from: '\u{222c}', to: '\u{2230}' },
    Range { from: '\u{2231}', to: '\u{225f}' },
    Range { from: '\u{2260}', to: '\u{2260}' },
    Range { from: '\u{2261}', to: '\u{226d}' },
    Range { from: '\u{226e}', to: '\u{226f}' },
    Range { from: '\u{2270}', to: '\u{2328}' },
    Range { from: '\u{2329}', to: '\u{232a}' },
    Range { from: '\u{232b}', to: '\u{2429}' },
    Range { from: '\u{242a}', to: '\u{243f}' },
    Range { from: '\u{2440}', to: '\u{244a}' },
    Range { from: '\u{244b}', to: '\u{245f}' },
    Range { from: '\u{2460}', to: '\u{2487}' },
    Range { from: '\u{2488}', to: '\u{249b}' },
    Range { from: '\u{249c}', to: '\u{24ea}' },
    Range { from: '\u{24eb}', to: '\u{2a0b}' },
    Range { from: '\u{2a0c}', to: '\u{2a0c}' },
    Range { from: '\u{2a0d}', to: '\u{2a73}' },
    Range { from: '\u{2a74}', to: '\u{2a76}' },
    Range { from: '\u{2a77}', to: '\u{2adb}' },
    Range { from: '\u{2adc}', to: '\u{2adc}' },
    Range { from: '\u{2add}', to: '\u{2b73}' },
    Range { from: '\u{2b74}', to: '\u{2b75}' },
    Range { from: '\u{2b76}', to: '\u{2bff}' },
    Range { from: '\u{2c00}', to: '\u{2c2f}' },
    Range { from: '\u{2c30}', to: '\u{2c5f}' },
    Range { from: '\u{2c60}', to: '\u{2c75}' },
    Range { from: '\u{2c76}', to: '\u{2c7b}' },
    Range { from: '\u{2c7c}', to: '\u{2ce2}' },
    Range { from: '\u{2ce3}', to: '\u{2cea}' },
    Range { from: '\u{2ceb}', to: '\u{2ced}' },
    Range { from: '\u{2cee}', to: '\u{2cf1}' },
    Range { from: '\u{2cf2}', to: '\u{2cf3}' },
    Range { from: '\u{2cf4}', to: '\u{2cf8}' },
    Range { from: '\u{2cf9}', to: '\u{2d25}' },
    Range { from: '\u{2d26}', to: '\u{2d27}' },
    Range { from: '\u{2d28}', to: '\u{2d2c}' },
    Range { from: '\u{2d2d}', to: '\u{2d2f}' },
    Range { from: '\u{2d30}', to: '\u{2d67}' },
    Range { from: '\u{2d68}', to: '\u{2d6e}' },
    Range { from: '\u{2d6f}', to: '\u{2d70}' },
    Range { from: '\u{2d71}', to: '\u{2d7e}' },
    Range { from: '\u{2d7f}', to: '\u{2d96}' },
    Range { from: '\u{2d97}', to: '\u{2d9f}' },
    Range { from: '\u{2da0}', to: '\u{2da6}' },
    Range { from: '\u{2da7}', to: '\u{2da7}' },
    Range { from: '\u{2da8}', to: '\u{2dae}' },
    Range { from: '\u{2daf}', to: '\u{2daf}' },
    Range { from: '\u{2db0}', to: '\u{2db6}' },
    Range { from: '\u{2db7}', to: '\u{2db7}' },
    Range { from: '\u{2db8}', to: '\u{2dbe}' },
    Range { from: '\u{2dbf}', to: '\u{2dbf}' },
    Range { from: '\u{2dc0}', to: '\u{2dc6}' },
    Range { from: '\u{2dc7}', to: '\u{2dc7}' },
    Range { from: '\u{2dc8}', to: '\u{2dce}' },
    Range { from: '\u{2dcf}', to: '\u{2dcf}' },
    Range { from: '\u{2dd0}', to: '\u{2dd6}' },
    Range { from: '\u{2dd7}', to: '\u{2dd7}' },
    Range { from: '\u{2dd8}', to: '\u{2dde}' },
    Range { from: '\u{2ddf}', to: '\u{2ddf}' },
    Range { from: '\u{2de0}', to: '\u{2e5d}' },
    Range { from: '\u{2e5e}', to: '\u{2e7f}' },
    Range { from: '\u{2e80}', to: '\u{2e99}' },
    Range { from: '\u{2e9a}', to: '\u{2e9a}' },
    Range { from: '\u{2e9b}', to: '\u{2e9e}' },
    Range { from: '\u{2e9f}', to: '\u{2e9f}' },
    Range { from: '\u{2ea0}', to: '\u{2ef2}' },
    Range { from: '\u{2ef3}', to: '\u{2ef3}' },
    Range { from: '\u{2ef4}', to: '\u{2eff}' },
    Range { from: '\u{2f00}', to: '\u{2fd5}' },
    Range { from: '\u{2fd6}', to: '\u{2fff}' },
    Range { from: '\u{3000}', to: '\u{3002}' },
    Range { from: '\u{3003}', to: '\u{3035}' },
    Range { from: '\u{3036}', to: '\u{303a}' },
    Range { from: '\u{303b}', to: '\u{303f}' },
    Range { from: '\u{3040}', to: '\u{3040}' },
    Range { from: '\u{3041}', to: '\u{3096}' },
    Range { from: '\u{3097}', to: '\u{309f}' },
    Range { from: '\u{30a0}', to: '\u{30fe}' },
    Range { from: '\u{30ff}', to: '\u{30ff}' },
    Range { from: '\u{3100}', to: '\u{3104}' },
    Range { from: '\u{3105}', to: '\u{312f}' },
    Range { from: '\u{3130}', to: '\u{319f}' },
    Range { from: '\u{31a0}', to: '\u{31e5}' },
    Range { from: '\u{31e6}', to: '\u{31ef}' },
    Range { from: '\u{31f0}', to: '\u{31ff}' },
    Range { from: '\u{3200}', to: '\u{3247}' },
    Range { from: '\u{3248}', to: '\u{324f}' },
    Range { from: '\u{3250}', to: '\u{33ff}' },
    Range { from: '\u{3400}', to: '\u{a48c}' },
    Range { from: '\u{a48d}', to: '\u{a48f}' },
    Range { from: '\u{a490}', to: '\u{a4c6}' },
    Range { from: '\u{a4c7}', to: '\u{a4cf}' },
    Range { from: '\u{a4d0}', to: '\u{a62b}' },
    Range { from: '\u{a62c}', to: '\u{a63f}' },
    Range { from: '\u{a640}', to: '\u{a66c}' },
    Range { from: '\u{a66d}', to: '\u{a67f}' },
    Range { from: '\u{a680}', to: '\u{a69d}' },
    Range { from: '\u{a69e}', to: '\u{a6f7}' },
    Range { from: '\u{a6f8}', to: '\u{a6ff}' },
    Range { from: '\u{a700}', to: '\u{a721}' },
    Range { from: '\u{a722}', to: '\u{a72e}' },
    Range { from: '\u{a72f}', to: '\u{a731}' },
    Range { from: '\u{a732}', to: '\u{a770}' },
    Range { from: '\u{a771}', to: '\u{a778}' },
    Range { from: '\u{a779}', to: '\u{a786}' },
    Range { from: '\u{a787}', to: '\u{a78a}' },
    Range { from: '\u{a78b}', to: '\u{a792}' },
    Range { from: '\u{a793}', to: '\u{a795}' },
    Range { from: '\u{a796}', to: '\u{a7dc}' },
    Range { from: '\u{a7dd}', to: '\u{a7f0}' },
    Range { from: '\u{a7f1}', to: '\u{a7f9}' },
    Range { from: '\u{a7fa}', to: '\u{a82c}' },
    Range { from: '\u{a82d}', to: '\u{a82f}' },
    Range { from: '\u{a830}', to: '\u{a839}' },
    Range { from: '\u{a83a}', to: '\u{a83f}' },
    Range { from: '\u{a840}', to: '\u{a877}' },
    Range { from: '\u{a878}', to: '\u{a87f}' },
    Range { from: '\u{a880}', to: '\u{a8c5}' },
    Range { from: '\u{a8c6}', to: '\u{a8cd}' },
    Range { from: '\u{a8ce}', to: '\u{a8d9}' },
    Range { from: '\u{a8da}', to: '\u{a8df}' },
    Range { from: '\u{a8e0}', to: '\u{a953}' },
    Range { from: '\u{a954}', to: '\u{a95e}' },
    Range { from: '\u{a95f}', to: '\u{a97c}' },
    Range { from: '\u{a97d}', to: '\u{a97f}' },
    Range { from: '\u{a980}', to: '\u{a9cd}' },
    Range { from: '\u{a9ce}', to: '\u{a9ce}' },
    Range { from: '\u{a9cf}', to: '\u{a9d9}' },
    Range { from: '\u{a9da}', to: '\u{a9dd}' },
    Range { from: '\u{a9de}', to: '\u{a9fe}' },
    Range { from: '\u{a9ff}', to: '\u{a9ff}' },
    Range { from: '\u{aa00}', to: '\u{aa36}' },
    Range { from: '\u{aa37}', to: '\u{aa3f}' },
    Range { from: '\u{aa40}', to: '\u{aa4d}' },
    Range { from: '\u{aa4e}', to: '\u{aa4f}' },
    Range { from: '\u{aa50}', to: '\u{aa59}' },
    Range { from: '\u{aa5a}', to: '\u{aa5b}' },
    Range { from: '\u{aa5c}', to: '\u{aac2}' },
    Range { from: '\u{aac3}', to: '\u{aada}' },
    Range { from: '\u{aadb}', to: '\u{aaf6}' },
    Range { from: '\u{aaf7}', to: '\u{ab00}' },
    Range { from: '\u{ab01}', to: '\u{ab06}' },
    Range { from: '\u{ab07}', to: '\u{ab08}' },
    Range { from: '\u{ab09}', to: '\u{ab0e}' },
    Range { from: '\u{ab0f}', to: '\u{ab10}' },
    Range { from: '\u{ab11}', to: '\u{ab16}' },
    Range { from: '\u{ab17}', to: '\u{ab1f}' },
    Range { from: '\u{ab20}', to: '\u{ab26}' },
    Range { from: '\u{ab27}', to: '\u{ab27}' },
    Range { from: '\u{ab28}', to: '\u{ab2e}' },
    Range { from: '\u{ab2f}', to: '\u{ab2f}' },
    Range { from: '\u{ab30}', to: '\u{ab5b}' },
    Range { from: '\u{ab5c}', to: '\u{ab5f}' },
    Range { from: '\u{ab60}', to: '\u{ab68}' },
    Range { from: '\u{ab69}', to: '\u{ab6b}' },
    Range { from: '\u{ab6c}', to: '\u{ab6f}' },
    Range { from: '\u{ab70}', to: '\u{abbf}' },
    Range { from: '\u{abc0}', to: '\u{abed}' },
    Range { from: '\u{abee}', to: '\u{abef}' },
    Range { from: '\u{abf0}', to: '\u{abf9}' },
    Range { from: '\u{abfa}', to: '\u{abff}' },
    Range { from: '\u{ac00}', to: '\u{d7a3}' },
    Range { from: '\u{d7a4}', to: '\u{d7af}' },
    Range { from: '\u{d7b0}', to: '\u{d7c6}' },
    Range { from: '\u{d7c7}', to: '\u{d7ca}' },
    Range { from: '\u{d7cb}', to: '\u{d7fb}' },
    Range { from: '\u{d7fc}', to: '\u{d7ff}' },
    Range { from: '\u{e000}', to: '\u{f8ff}' },
    Range { from: '\u{f900}', to: '\u{fa26}' },
    Range { from: '\u{fa27}', to: '\u{fa29}' },
    Range { from: '\u{fa2a}', to: '\u{fad9}' },
    Range { from: '\u{fada}', to: '\u{faff}' },
    Range { from: '\u{fb00}', to: '\u{fb06}' },
    Range { from: '\u{fb07}', to: '\u{fb12}' },
    Range { from: '\u{fb13}', to: '\u{fb17}' },
    Range { from: '\u{fb18}', to: '\u{fb1c}' },
    Range { from: '\u{fb1d}', to: '\u{fb51}' },
    Range { from: '\u{fb52}', to: '\u{fb55}' },
    Range { from: '\u{fb56}', to: '\u{fb59}' },
    Range { from: '\u{fb5a}', to: '\u{fb5d}' },
    Range { from: '\u{fb5e}', to: '\u{fb61}' },
    Range { from: '\u{fb62}', to: '\u{fb65}' },
    Range { from: '\u{fb66}', to: '\u{fb69}' },
    Range { from: '\u{fb6a}', to: '\u{fb6d}' },
    Range { from: '\u{fb6e}', to: '\u{fb71}' },
    Range { from: '\u{fb72}', to: '\u{fb75}' },
    Range { from: '\u{fb76}', to: '\u{fb79}' },
    Range { from: '\u{fb7a}', to: '\u{fb7d}' },
    Range { from: '\u{fb7e}', to: '\u{fb81}' },
    Range { from: '\u{fb82}', to: '\u{fb8d}' },
    Range { from: '\u{fb8e}', to: '\u{fb91}' },
    Range { from: '\u{fb92}', to: '\u{fb95}' },
    Range { from: '\u{fb96}', to: '\u{fb99}' },
    Range { from: '\u{fb9a}', to: '\u{fb9d}' },
    Range { from: '\u{fb9e}', to: '\u{fb9f}' },
    Range { from: '\u{fba0}', to: '\u{fba3}' },
    Range { from: '\u{fba4}', to: '\u{fba5}' },
    Range { from: '\u{fba6}', to: '\u{fba9}' },
    Range { from: '\u{fbaa}', to: '\u{fbad}' },
    Range { from: '\u{fbae}', to: '\u{fbb1}' },
    Range { from: '\u{fbb2}', to: '\u{fbd2}' },
    Range { from: '\u{fbd3}', to: '\u{fbd6}' },
    Range { from: '\u{fbd7}', to: '\u{fbe3}' },
    Range { from: '\u{fbe4}', to: '\u{fbe7}' },
    Range { from: '\u{fbe8}', to: '\u{fbf5}' },
    Range { from: '\u{fbf6}', to: '\u{fbf8}' },
    Range { from: '\u{fbf9}', to: '\u{fbfb}' },
    Range { from: '\u{fbfc}', to: '\u{fbff}' },
    Range { from: '\u{fc00}', to: '\u{fd3d}' },
    Range { from: '\u{fd3e}', to: '\u{fd4f}' },
    Range { from: '\u{fd50}', to: '\u{fdc7}' },
    Range { from: '\u{fdc8}', to: '\u{fdcf}' },
    Range { from: '\u{fdd0}', to: '\u{fdef}' },
    Range { from: '\u{fdf0}', to: '\u{fdfc}' },
    Range { from: '\u{fdfd}', to: '\u{fdff}' },
    Range { from: '\u{fe00}', to: '\u{fe0f}' },
    Range { from: '\u{fe10}', to: '\u{fe18}' },
    Range { from: '\u{fe19}', to: '\u{fe1f}' },
    Range { from: '\u{fe20}', to: '\u{fe2f}' },
    Range { from: '\u{fe30}', to: '\u{fe48}' },
    Range { from: '\u{fe49}', to: '\u{fe4c}' },
    Range { from: '\u{fe4d}', to: '\u{fe4f}' },
    Range { from: '\u{fe50}', to: '\u{fe6b}' },
    Range { from: '\u{fe6c}', to: '\u{fe6f}' },
    Range { from: '\u{fe70}', to: '\u{fe88}' },
    Range { from: '\u{fe89}', to: '\u{fe8c}' },
    Range { from: '\u{fe8d}', to: '\u{fe8e}' },
    Range { from: '\u{fe8f}', to: '\u{fe92}' },
    Range { from: '\u{fe93}', to: '\u{fe94}' },
    Range { from: '\u{fe95}', to: '\u{fe98}' },
    Range { from: '\u{fe99}', to: '\u{fe9c}' },
    Range { from: '\u{fe9d}', to: '\u{fea0}' },
    Range { from: '\u{fea1}', to: '\u{fea4}' },
    Range { from: '\u{fea5}', to: '\u{fea8}' },
    Range { from: '\u{fea9}', to: '\u{feb0}' },
    Range { from: '\u{feb1}', to: '\u{feb4}' },
    Range { from: '\u{feb5}', to: '\u{feb8}' },
    Range { from: '\u{feb9}', to: '\u{febc}' },
    Range { from: '\u{febd}', to: '\u{fec0}' },
    Range { from: '\u{fec1}', to: '\u{fec4}' },
    Range { from: '\u{fec5}', to: '\u{fec8}' },
    Range { from: '\u{fec9}', to: '\u{fecc}' },
    Range { from: '\u{fecd}', to: '\u{fed0}' },
    Range { from: '\u{fed1}', to: '\u{fed4}' },
    Range { from: '\u{fed5}', to: '\u{fed8}' },
    Range { from: '\u{fed9}', to: '\u{fedc}' },
    Range { from: '\u{fedd}', to: '\u{fee0}' },
    Range { from: '\u{fee1}', to: '\u{fee4}' },
    Range { from: '\u{fee5}', to: '\u{fee8}' },
    Range { from: '\u{fee9}', to: '\u{feec}' },
    Range { from: '\u{feed}', to: '\u{fef0}' },
    Range { from: '\u{fef1}', to: '\u{fef4}' },
    Range { from: '\u{fef5}', to: '\u{ffbe}' },
    Range { from: '\u{ffbf}', to: '\u{ffc1}' },
    Range { from: '\u{ffc2}', to: '\u{ffdc}' },
    Range { from: '\u{ffdd}', to: '\u{ffdf}' },
    Range { from: '\u{ffe0}', to: '\u{ffee}' },
    Range { from: '\u{ffef}', to: '\u{ffff}' },
    Range { from: '\u{10000}', to: '\u{1000b}' },
    Range { from: '\u{1000c}', to: '\u{1000c}' },
    Range { from: '\u{1000d}', to: '\u{10026}' },
    Range { from: '\u{10027}', to: '\u{10027}' },
    Range { from: '\u{10028}', to: '\u{1003a}' },
    Range { from: '\u{1003b}', to: '\u{1003e}' },
    Range { from: '\u{1003f}', to: '\u{1004d}' },
    Range { from: '\u{1004e}', to: '\u{1004f}' },
    Range { from: '\u{10050}', to: '\u{1005d}' },
    Range { from: '\u{1005e}', to: '\u{1007f}' },
    Range { from: '\u{10080}', to: '\u{100fa}' },
    Range { from: '\u{100fb}', to: '\u{100ff}' },
    Range { from: '\u{10100}', to: '\u{10102}' },
    Range { from: '\u{10103}', to: '\u{10106}' },
    Range { from: '\u{10107}', to: '\u{10133}' },
    Range { from: '\u{10134}', to: '\u{10136}' },
    Range { from: '\u{10137}', to: '\u{1018e}' },
    Range { from: '\u{1018f}', to: '\u{1018f}' },
    Range { from: '\u{10190}', to: '\u{1019c}' },
    Range { from: '\u{1019d}', to: '\u{1019f}' },
    Range { from: '\u{101a0}', to: '\u{101a0}' },
    Range { from: '\u{101a1}', to: '\u{101cf}' },
    Range { from: '\u{101d0}', to: '\u{101fd}' },
    Range { from: '\u{101fe}', to: '\u{1027f}' },
    Range { from: '\u{10280}', to: '\u{1029c}' },
    Range { from: '\u{1029d}', to: '\u{1029f}' },
    Range { from: '\u{102a0}', to: '\u{102d0}' },
    Range { from: '\u{102d1}', to: '\u{102df}' },
    Range { from: '\u{102e0}', to: '\u{102fb}' },
    Range { from: '\u{102fc}', to: '\u{102ff}' },
    Range { from: '\u{10300}', to: '\u{10323}' },
    Range { from: '\u{10324}', to: '\u{1032c}' },
    Range { from: '\u{1032d}', to: '\u{1034a}' },
    Range { from: '\u{1034b}', to: '\u{1034f}' },
    Range { from: '\u{10350}', to: '\u{1037a}' },
    Range { from: '\u{1037b}', to: '\u{1037f}' },
    Range { from: '\u{10380}', to: '\u{1039d}' },
    Range { from: '\u{1039e}', to: '\u{1039e}' },
    Range { from: '\u{1039f}', to: '\u{103c3}' },
    Range { from: '\u{103c4}', to: '\u{103c7}' },
    Range { from: '\u{103c8}', to: '\u{103d5}' },
    Range { from: '\u{103d6}', to: '\u{103ff}' },
    Range { from: '\u{10400}', to: '\u{10427}' },
    Range { from: '\u{10428}', to: '\u{1049d}' },
    Range { from: '\u{1049e}', to: '\u{1049f}' },
    Range { from: '\u{104a0}', to: '\u{104a9}' },
    Range { from: '\u{104aa}', to: '\u{104af}' },
    Range { from: '\u{104b0}', to: '\u{104d3}' },
    Range { from: '\u{104d4}', to: '\u{104d7}' },
    Range { from: '\u{104d8}', to: '\u{104fb}' },
    Range { from: '\u{104fc}', to: '\u{104ff}' },
    Range { from: '\u{10500}', to: '\u{10527}' },
    Range { from: '\u{10528}', to: '\u{1052f}' },
    Range { from: '\u{10530}', to: '\u{10563}' },
    Range { from: '\u{10564}', to: '\u{1056e}' },
    Range { from: '\u{1056f}', to: '\u{10596}' },
    Range { from: '\u{10597}', to: '\u{105a1}' },
    Range { from: '\u{105a2}', to: '\u{105a2}' },
    Range { from: '\u{105a3}', to: '\u{105b1}' },
    Range { from: '\u{105b2}', to: '\u{105b2}' },
    Range { from: '\u{105b3}', to: '\u{105b9}' },
    Range { from: '\u{105ba}', to: '\u{105bc}' },
    Range { from: '\u{105bd}', to: '\u{105bf}' },
    Range { from: '\u{105c0}', to: '\u{105f3}' },
    Range { from: '\u{105f4}', to: '\u{105ff}' },
    Range { from: '\u{10600}', to: '\u{10736}' },
    Range { from: '\u{10737}', to: '\u{1073f}' },
    Range { from: '\u{10740}', to: '\u{10755}' },
    Range { from: '\u{10756}', to: '\u{1075f}' },
    Range { from: '\u{10760}', to: '\u{10767}' },
    Range { from: '\u{10768}', to: '\u{1077f}' },
    Range { from: '\u{10780}', to: '\u{107ba}' },
    Range { from: '\u{107bb}', to: '\u{107ff}' },
    Range { from: '\u{10800}', to: '\u{10805}' },
    Range { from: '\u{10806}', to: '\u{10809}' },
    Range { from: '\u{1080a}', to: '\u{10835}' },
    Range { from: '\u{10836}', to: '\u{10838}' },
    Range { from: '\u{10839}', to: '\u{1083b}' },
    Range { from: '\u{1083c}', to: '\u{1083e}' },
    Range { from: '\u{1083f}', to: '\u{10855}' },
    Range { from: '\u{10856}', to: '\u{10856}' },
    Range { from: '\u{10857}', to: '\u{1089e}' },
    Range { from: '\u{1089f}', to: '\u{108a6}' },
    Range { from: '\u{108a7}', to: '\u{108af}' },
    Range { from: '\u{108b0}', to: '\u{108df}' },
    Range { from: '\u{108e0}', to: '\u{108f2}' },
    Range { from: '\u{108f3}', to: '\u{108f5}' },
    Range { from: '\u{108f6}', to: '\u{108fa}' },
    Range { from: '\u{108fb}', to: '\u{1091b}' },
    Range { from: '\u{1091c}', to: '\u{1091e}' },
    Range { from: '\u{1091f}', to: '\u{10939}' },
    Range { from: '\u{1093a}', to: '\u{1093e}' },
    Range { from: '\u{1093f}', to: '\u{10959}' },
    Range { from: '\u{1095a}', to: '\u{1097f}' },
    Range { from: '\u{10980}', to: '\u{109b7}' },
    Range { from: '\u{109b8}', to: '\u{109bb}' },
    Range { from: '\u{109bc}', to: '\u{109cf}' },
    Range { from: '\u{109d0}', to: '\u{109d1}' },
    Range { from: '\u{109d2}', to: '\u{10a03}' },
    Range { from: '\u{10a04}', to: '\u{10a06}' },
    Range { from: '\u{10a07}', to: '\u{10a0b}' },
    Range { from: '\u{10a0c}', to: '\u{10a13}' },
    Range { from: '\u{10a14}', to: '\u{10a14}' },
    Range { from: '\u{10a15}', to: '\u{10a17}' },
    Range { from: '\u{10a18}', to: '\u{10a18}' },
    Range { from: '\u{10a19}', to: '\u{10a35}' },
    Range { from: '\u{10a36}', to: '\u{10a37}' },
    Range { from: '\u{10a38}', to: '\u{10a3a}' },
    Range { from: '\u{10a3b}', to: '\u{10a3e}' },
    Range { from: '\u{10a3f}', to: '\u{10a48}' },
    Range { from: '\u{10a49}', to: '\u{10a4f}' },
    Range { from: '\u{10a50}', to: '\u{10a58}' },
    Range { from: '\u{10a59}', to: '\u{10a5f}' },
    Range { from: '\u{10a60}', to: '\u{10a9f}' },
    Range { from: '\u{10aa0}', to: '\u{10abf}' },
    Range { from: '\u{10ac0}', to: '\u{10ae6}' },
    Range { from: '\u{10ae7}', to: '\u{10aea}' },
    Range { from: '\u{10aeb}', to: '\u{10af6}' },
    Range { from: '\u{10af7}', to: '\u{10aff}' },
    Range { from: '\u{10b00}', to: '\u{10b35}' },
    Range { from: '\u{10b36}', to: '\u{10b38}' },
    Range { from: '\u{10b39}', to: '\u{10b55}' },
    Range { from: '\u{10b56}', to: '\u{10b57}' },
    Range { from: '\u{10b58}', to: '\u{10b72}' },
    Range { from: '\u{10b73}', to: '\u{10b77}' },
    Range { from: '\u{10b78}', to: '\u{10b91}' },
    Range { from: '\u{10b92}', to: '\u{10b98}' },
    Range { from: '\u{10b99}', to: '\u{10b9c}' },
    Range { from: '\u{10b9d}', to: '\u{10ba8}' },
    Range { from: '\u{10ba9}', to: '\u{10baf}' },
    Range { from: '\u{10bb0}', to: '\u{10bff}' },
    Range { from: '\u{10c00}', to: '\u{10c48}' },
    Range { from: '\u{10c49}', to: '\u{10c7f}' },
    Range { from: '\u{10c80}', to: '\u{10cb2}' },
    Range { from: '\u{10cb3}', to: '\u{10cbf}' },
    Range { from: '\u{10cc0}', to: '\u{10cf2}' },
    Range { from: '\u{10cf3}', to: '\u{10cf9}' },
    Range { from: '\u{10cfa}', to: '\u{10d27}' },
    Range { from: '\u{10d28}', to: '\u{10d2f}' },
    Range { from: '\u{10d30}', to: '\u{10d39}' },
    Range { from: '\u{10d3a}', to: '\u{10d3f}' },
    Range { from: '\u{10d40}', to: '\u{10d4f}' },
    Range { from: '\u{10d50}', to: '\u{10d65}' },
    Range { from: '\u{10d66}', to: '\u{10d68}' },
    Range { from: '\u{10d69}', to: '\u{10d85}' },
    Range { from: '\u{10d86}', to: '\u{10d8d}' },
    Range { from: '\u{10d8e}', to: '\u{10d8f}' },
    Range { from: '\u{10d90}', to: '\u{10e5f}' },
    Range { from: '\u{10e60}', to: '\u{10e7e}' },
    Range { from: '\u{10e7f}', to: '\u{10e7f}' },
    Range { from: '\u{10e80}', to: '\u{10ea9}' },
    Range { from: '\u{10eaa}', to: '\u{10eaa}' },
    Range { from: '\u{10eab}', to: '\u{10ead}' },
    Range { from: '\u{10eae}', to: '\u{10eb1}' },
    Range { from: '\u{10eb2}', to: '\u{10ec1}' },
    Range { from: '\u{10ec2}', to: '\u{10ec7}' },
    Range { from: '\u{10ec8}', to: '\u{10ecf}' },
    Range { from: '\u{10ed0}', to: '\u{10ed8}' },
    Range { from: '\u{10ed9}', to: '\u{10ef9}' },
    Range { from: '\u{10efa}', to: '\u{10f27}' },
    Range { from: '\u{10f28}', to: '\u{10f2f}' },
    Range { from: '\u{10f30}', to: '\u{10f59}' },
    Range { from: '\u{10f5a}', to: '\u{10f6f}' },
    Range { from: '\u{10f70}', to: '\u{10f89}' },
    Range { from: '\u{10f8a}', to: '\u{10faf}' },
    Range { from: '\u{10fb0}', to: '\u{10fcb}' },
    Range { from: '\u{10fcc}', to: '\u{10fdf}' },
    Range { from: '\u{10fe0}', to: '\u{10ff6}' },
    Range { from: '\u{10ff7}', to: '\u{10fff}' },
    Range { from: '\u{11000}', to: '\u{1104d}' },
    Range { from: '\u{1104e}', to: '\u{11051}' },
    Range { from: '\u{11052}', to: '\u{11075}' },
    Range { from: '\u{11076}', to: '\u{1107e}' },
    Range { from: '\u{1107f}', to: '\u{110bc}' },
    Range { from: '\u{110bd}', to: '\u{110bd}' },
    Range { from: '\u{110be}', to: '\u{110c2}' },
    Range { from: '\u{110c3}', to: '\u{110cf}' },
    Range { from: '\u{110d0}', to: '\u{110e8}' },
    Range { from: '\u{110e9}', to: '\u{110ef}' },
    Range { from: '\u{110f0}', to: '\u{110f9}' },
    Range { from: '\u{110fa}', to: '\u{110ff}' },
    Range { from: '\u{11100}', to: '\u{11134}' },
    Range { from: '\u{11135}', to: '\u{11135}' },
    Range { from: '\u{11136}', to: '\u{11147}' },
    Range { from: '\u{11148}', to: '\u{1114f}' },
    Range { from: '\u{11150}', to: '\u{11176}' },
    Range { from: '\u{11177}', to: '\u{1117f}' },
    Range { from: '\u{11180}', to: '\u{111df}' },
    Range { from: '\u{111e0}', to: '\u{111e0}' },
    Range { from: '\u{111e1}', to: '\u{111f4}' },
    Range { from: '\u{111f5}', to: '\u{111ff}' },
    Range { from: '\u{11200}', to: '\u{11211}' },
    Range { from: '\u{11212}', to: '\u{11212}' },
    Range { from: '\u{11213}', to: '\u{11241}' },
    Range { from: '\u{11242}', to: '\u{1127f}' },
    Range { from: '\u{11280}', to: '\u{11286}' },
    Range { from: '\u{11287}', to: '\u{11289}' },
    Range { from: '\u{1128a}', to: '\u{1128d}' },
    Range { from: '\u{1128e}', to: '\u{1128e}' },
    Range { from: '\u{1128f}', to: '\u{1129d}' },
    Range { from: '\u{1129e}', to: '\u{1129e}' },
    Range { from: '\u{1129f}', to: '\u{112a9}' },
    Range { from: '\u{112aa}', to: '\u{112af}' },
    Range { from: '\u{112b0}', to: '\u{112ea}' },
    Range { from: '\u{112eb}', to: '\u{112ef}' },
    Range { from: '\u{112f0}', to: '\u{112f9}' },
    Range { from: '\u{112fa}', to: '\u{112ff}' },
    Range { from: '\u{11300}', to: '\u{11303}' },
    Range { from: '\u{11304}', to: '\u{11304}' },
    Range { from: '\u{11305}', to: '\u{1130c}' },
    Range { from: '\u{1130d}', to: '\u{11312}' },
    Range { from: '\u{11313}', to: '\u{11328}' },
    Range { from: '\u{11329}', to: '\u{11329}' },
    Range { from: '\u{1132a}', to: '\u{11330}' },
    Range { from: '\u{11331}', to: '\u{11334}' },
    Range { from: '\u{11335}', to: '\u{11339}' },
    Range { from: '\u{1133a}', to: '\u{1133a}' },
    Range { from: '\u{1133b}', to: '\u{11344}' },
    Range { from: '\u{11345}', to: '\u{1134a}' },
    Range { from: '\u{1134b}', to: '\u{1134d}' },
    Range { from: '\u{1134e}', to: '\u{11350}' },
    Range { from: '\u{11351}', to: '\u{11356}' },
    Range { from: '\u{11357}', to: '\u{11357}' },
    Range { from: '\u{11358}', to: '\u{1135c}' },
    Range { from: '\u{1135d}', to: '\u{11363}' },
    Range { from: '\u{11364}', to: '\u{11365}' },
    Range { from: '\u{11366}', to: '\u{1136c}' },
    Range { from: '\u{1136d}', to: '\u{1136f}' },
    Range { from: '\u{11370}', to: '\u{11374}' },
    Range { from: '\u{11375}', to: '\u{1137f}' },
    Range { from: '\u{11380}', to: '\u{11389}' },
    Range { from: '\u{1138a}', to: '\u{1138f}' },
    Range { from: '\u{11390}', to: '\u{113b5}' },
    Range { from: '\u{113b6}', to: '\u{113b6}' },
    Range { from: '\u{113b7}', to: '\u{113c0}' },
    Range { from: '\u{113c1}', to: '\u{113c6}' },
    Range { from: '\u{113c7}', to: '\u{113ca}' },
    Range { from: '\u{113cb}', to: '\u{113cb}' },
    Range { from: '\u{113cc}', to: '\u{113d5}' },
    Range { from: '\u{113d6}', to: '\u{113d8}' },
    Range { from: '\u{113d9}', to: '\u{113e0}' },
    Range { from: '\u{113e1}', to: '\u{113e2}' },
    Range { from: '\u{113e3}', to: '\u{113ff}' },
    Range { from: '\u{11400}', to: '\u{1145b}' },
    Range { from: '\u{1145c}', to: '\u{1145c}' },
    Range { from: '\u{1145d}', to: '\u{11461}' },
    Range { from: '\u{11462}', to: '\u{1147f}' },
    Range { from: '\u{11480}', to: '\u{114c7}' },
    Range { from: '\u{114c8}', to: '\u{114cf}' },
    Range { from: '\u{114d0}', to: '\u{114d9}' },
    Range { from: '\u{114da}', to: '\u{1157f}' },
    Range { from: '\u{11580}', to: '\u{115b5}' },
    Range { from: '\u{115b6}', to: '\u{115b7}' },
    Range { from: '\u{115b8}', to: '\u{115dd}' },
    Range { from: '\u{115de}', to: '\u{115ff}' },
    Range { from: '\u{11600}', to: '\u{11644}' },
    Range { from: '\u{11645}', to: '\u{1164f}' },
    Range { from: '\u{11650}', to: '\u{11659}' },
    Range { from: '\u{1165a}', to: '\u{1165f}' },
    Range { from: '\u{11660}', to: '\u{1166c}' },
    Range { from: '\u{1166d}', to: '\u{1167f}' },
    Range { from: '\u{11680}', to: '\u{116b9}' },
    Range { from: '\u{116ba}', to: '\u{116bf}' },
    Range { from: '\u{116c0}', to: '\u{116c9}' },
    Range { from: '\u{116ca}', to: '\u{116cf}' },
    Range { from: '\u{116d0}', to: '\u{116e3}' },
    Range { from: '\u{116e4}', to: '\u{116ff}' },
    Range { from: '\u{11700}', to: '\u{1171a}' },
    Range { from: '\u{1171b}', to: '\u{1171c}' },
    Range { from: '\u{1171d}', to: '\u{1172b}' },
    Range { from: '\u{1172c}', to: '\u{1172f}' },
    Range { from: '\u{11730}', to: '\u{11746}' },
    Range { from: '\u{11747}', to: '\u{117ff}' },
    Range { from: '\u{11800}', to: '\u{1183b}' },
    Range { from: '\u{1183c}', to: '\u{1189f}' },
    Range { from: '\u{118a0}', to: '\u{118bf}' },
    Range { from: '\u{118c0}', to: '\u{118f2}' },
    Range { from: '\u{118f3}', to: '\u{118fe}' },
    Range { from: '\u{118ff}', to: '\u{11906}' },
    Range { from: '\u{11907}', to: '\u{1190b}' },
    Range { from: '\u{1190c}', to: '\u{11913}' },
    Range { from: '\u{11914}', to: '\u{11917}' },
    Range { from: '\u{11918}', to: '\u{11935}' },
    Range { from: '\u{11936}', to: '\u{1193a}' },
    Range { from: '\u{1193b}', to: '\u{11946}' },
    Range { from: '\u{11947}', to: '\u{1194f}' },
    Range { from: '\u{11950}', to: '\u{11959}' },
    Range { from: '\u{1195a}', to: '\u{1199f}' },
    Range { from: '\u{119a0}', to: '\u{119a7}' },
    Range { from: '\u{119a8}', to: '\u{119a9}' },
    Range { from: '\u{119aa}', to: '\u{119d7}' },
    Range { from: '\u{119d8}', to: '\u{119d9}' },
    Range { from: '\u{119da}', to: '\u{119e4}' },
    Range { from: '\u{119e5}', to: '\u{119ff}' },
    Range { from: '\u{11a00}', to: '\u{11a47}' },
    Range { from: '\u{11a48}', to: '\u{11a4f}' },
    Range { from: '\u{11a50}', to: '\u{11aa2}' },
    Range { from: '\u{11aa3}', to: '\u{11aaf}' },
    Range { from: '\u{11ab0}', to: '\u{11af8}' },
    Range { from: '\u{11af9}', to: '\u{11aff}' },
    Range { from: '\u{11b00}', to: '\u{11b09}' },
    Range { from: '\u{11b0a}', to: '\u{11b5f}' },
    Range { from: '\u{11b60}', to: '\u{11b67}' },
    Range { from: '\u{11b68}', to: '\u{11bbf}' },
    Range { from: '\u{11bc0}', to: '\u{11be1}' },
    Range { from: '\u{11be2}', to: '\u{11bef}' },
    Range { from: '\u{11bf0}', to: '\u{11bf9}' },
    Range { from: '\u{11bfa}', to: '\u{11bff}' },
    Range { from: '\u{11c00}', to: '\u{11c08}' },
    Range { from: '\u{11c09}', to: '\u{11c09}' },
    Range { from: '\u{11c0a}', to: '\u{11c36}' },
    Range { from: '\u{11c37}', to: '\u{11c37}' },
    Range { from: '\u{11c38}', to: '\u{11c45}' },
    Range { from: '\u{11c46}', to: '\u{11c4f}' },
    Range { from: '\u{11c50}', to: '\u{11c6c}' },
    Range { from: '\u{11c6d}', to: '\u{11c6f}' },
    Range { from: '\u{11c70}', to: '\u{11c8f}' },
    Range { from: '\u{11c90}', to: '\u{11c91}' },
    Range { from: '\u{11c92}', to: '\u{11ca7}' },
    Range { from: '\u{11ca8}', to: '\u{11ca8}' },
    Range { from: '\u{11ca9}', to: '\u{11cb6}' },
    Range { from: '\u{11cb7}', to: '\u{11cff}' },
    Range { from: '\u{11d00}', to: '\u{11d06}' },
    Range { from: '\u{11d07}', to: '\u{11d0a}' },
    Range { from: '\u{11d0b}', to: '\u{11d36}' },
    Range { from: '\u{11d37}', to: '\u{11d39}' },
    Range { from: '\u{11d3a}', to: '\u{11d3e}' },
    Range { from: '\u{11d3f}', to: '\u{11d47}' },
    Range { from: '\u{11d48}', to: '\u{11d4f}' },
    Range { from: '\u{11d50}', to: '\u{11d59}' },
    Range { from: '\u{11d5a}', to: '\u{11d5f}' },
    Range { from: '\u{11d60}', to: '\u{11d65}' },
    Range { from: '\u{11d66}', to: '\u{11d69}' },
    Range { from: '\u{11d6a}', to: '\u{11d8e}' },
    Range { from: '\u{11d8f}', to: '\u{11d92}' },
    Range { from: '\u{11d93}', to: '\u{11d98}' },
    Range { from: '\u{11d99}', to: '\u{11d9f}' },
    Range { from: '\u{11da0}', to: '\u{11da9}' },
    Range { from: '\u{11daa}', to: '\u{11daf}' },
    Range { from: '\u{11db0}', to: '\u{11ddb}' },
    Range { from: '\u{11ddc}', to: '\u{11ddf}' },
    Range { from: '\u{11de0}', to: '\u{11de9}' },
    Range { from: '\u{11dea}', to: '\u{11edf}' },
    Range { from: '\u{11ee0}', to: '\u{11ef8}' },
    Range { from: '\u{11ef9}', to: '\u{11eff}' },
    Range { from: '\u{11f00}', to: '\u{11f10}' },
    Range { from: '\u{11f11}', to: '\u{11f11}' },
    Range { from: '\u{11f12}', to: '\u{11f3a}' },
    Range { from: '\u{11f3b}', to: '\u{11f3d}' },
    Range { from: '\u{11f3e}', to: '\u{11f5a}' },
    Range { from: '\u{11f5b}', to: '\u{11faf}' },
    Range { from: '\u{11fb0}', to: '\u{11fb0}' },
    Range { from: '\u{11fb1}', to: '\u{11fbf}' },
    Range { from: '\u{11fc0}', to: '\u{11ff1}' },
    Range { from: '\u{11ff2}', to: '\u{11ffe}' },
    Range { from: '\u{11fff}', to: '\u{12399}' },
    Range { from: '\u{1239a}', to: '\u{123ff}' },
    Range { from: '\u{12400}', to: '\u{1246e}' },
    Range { from: '\u{1246f}', to: '\u{1246f}' },
    Range { from: '\u{12470}', to: '\u{12474}' },
    Range { from: '\u{12475}', to: '\u{1247f}' },
    Range { from: '\u{12480}', to: '\u{12543}' },
    Range { from: '\u{12544}', to: '\u{12f8f}' },
    Range { from: '\u{12f90}', to: '\u{12ff2}' },
    Range { from: '\u{12ff3}', to: '\u{12fff}' },
    Range { from: '\u{13000}', to: '\u{1342f}' },
    Range { from: '\u{13430}', to: '\u{1343f}' },
    Range { from: '\u{13440}', to: '\u{13455}' },
    Range { from: '\u{13456}', to: '\u{1345f}' },
    Range { from: '\u{13460}', to: '\u{143fa}' },
    Range { from: '\u{143fb}', to: '\u{143ff}' },
    Range { from: '\u{14400}', to: '\u{14646}' },
    Range { from: '\u{14647}', to: '\u{160ff}' },
    Range { from: '\u{16100}', to: '\u{16139}' },
    Range { from: '\u{1613a}', to: '\u{167ff}' },
    Range { from: '\u{16800}', to: '\u{16a38}' },
    Range { from: '\u{16a39}', to: '\u{16a3f}' },
    Range { from: '\u{16a40}', to: '\u{16a5e}' },
    Range { from: '\u{16a5f}', to: '\u{16a5f}' },
    Range { from: '\u{16a60}', to: '\u{16a69}' },
    Range { from: '\u{16a6a}', to: '\u{16a6d}' },
    Range { from: '\u{16a6e}', to: '\u{16abe}' },
    Range { from: '\u{16abf}', to: '\u{16abf}' },
    Range { from: '\u{16ac0}', to: '\u{16ac9}' },
    Range { from: '\u{16aca}', to: '\u{16acf}' },
    Range { from: '\u{16ad0}', to: '\u{16aed}' },
    Range { from: '\u{16aee}', to: '\u{16aef}' },
    Range { from: '\u{16af0}', to: '\u{16af5}' },
    Range { from: '\u{16af6}', to: '\u{16aff}' },
    Range { from: '\u{16b00}', to: '\u{16b45}' },
    Range { from: '\u{16b46}', to: '\u{16b4f}' },
    Range { from: '\u{16b50}', to: '\u{16b59}' },
    Range { from: '\u{16b5a}', to: '\u{16b5a}' },
    Range { from: '\u{16b5b}', to: '\u{16b61}' },
    Range { from: '\u{16b62}', to: '\u{16b62}' },
    Range { from: '\u{16b63}', to: '\u{16b77}' },
    Range { from: '\u{16b78}', to: '\u{16b7c}' },
    Range { from: '\u{16b7d}', to: '\u{16b8f}' },
    Range { from: '\u{16b90}', to: '\u{16d3f}' },
    Range { from: '\u{16d40}', to: '\u{16d79}' },
    Range { from: '\u{16d7a}', to: '\u{16e3f}' },
    Range { from: '\u{16e40}', to: '\u{16e5f}' },
    Range { from: '\u{16e60}', to: '\u{16e9a}' },
    Range { from: '\u{16e9b}', to: '\u{16e9f}' },
    Range { from: '\u{16ea0}', to: '\u{16eba}' },
    Range { from: '\u{16ebb}', to: '\u{16ed3}' },
    Range { from: '\u{16ed4}', to: '\u{16eff}' },
    Range { from: '\u{16f00}', to: '\u{16f4a}' },
    Range { from: '\u{16f4b}', to: '\u{16f4e}' },
    Range { from: '\u{16f4f}', to: '\u{16f87}' },
    Range { from: '\u{16f88}', to: '\u{16f8e}' },
    Range { from: '\u{16f8f}', to: '\u{16f9f}' },
    Range { from: '\u{16fa0}', to: '\u{16fdf}' },
    Range { from: '\u{16fe0}', to: '\u{16fe4}' },
    Range { from: '\u{16fe5}', to: '\u{16fef}' },
    Range { from: '\u{16ff0}', to: '\u{16ff6}' },
    Range { from: '\u{16ff7}', to: '\u{16fff}' },
    Range { from: '\u{17000}', to: '\u{18cd5}' },
    Range { from: '\u{18cd6}', to: '\u{18cfe}' },
    Range { from: '\u{18cff}', to: '\u{18d1e}' },
    Range { from: '\u{18d1f}', to: '\u{18d7f}' },
    Range { from: '\u{18d80}', to: '\u{18df2}' },
    Range { from: '\u{18df3}', to: '\u{1afef}' },
    Range { from: '\u{1aff0}', to: '\u{1aff3}' },
    Range { from: '\u{1aff4}', to: '\u{1aff4}' },
    Range { from: '\u{1aff5}', to: '\u{1affb}' },
    Range { from: '\u{1affc}', to: '\u{1afff}' },
    Range { from: '\u{1b000}', to: '\u{1b122}' },
    Range { from: '\u{1b123}', to: '\u{1b131}' },
    Range { from: '\u{1b132}', to: '\u{1b132}' },
    Range { from: '\u{1b133}', to: '\u{1b14f}' },
    Range { from: '\u{1b150}', to: '\u{1b152}' },
    Range { from: '\u{1b153}', to: '\u{1b155}' },
    Range { from: '\u{1b156}', to: '\u{1b163}' },
    Range { from: '\u{1b164}', to: '\u{1b167}' },
    Range { from: '\u{1b168}', to: '\u{1b16f}' },
    Range { from: '\u{1b170}', to: '\u{1b2fb}' },
    Range { from: '\u{1b2fc}', to: '\u{1bbff}' },
    Range { from: '\u{1bc00}', to: '\u{1bc6a}' },
    Range { from: '\u{1bc6b}', to: '\u{1bc6f}' },
    Range { from: '\u{1bc70}', to: '\u{1bc7c}' },
    Range { from: '\u{1bc7d}', to: '\u{1bc7f}' },
    Range { from: '\u{1bc80}', to: '\u{1bc88}' },
    Range { from: '\u{1bc89}', to: '\u{1bc8f}' },
    Range { from: '\u{1bc90}', to: '\u{1bc99}' },
    Range { from: '\u{1bc9a}', to: '\u{1bc9b}' },
    Range { from: '\u{1bc9c}', to: '\u{1bc9f}' },
    Range { from: '\u{1bca0}', to: '\u{1bca3}' },
    Range { from: '\u{1bca4}', to: '\u{1cbff}' },
    Range { from: '\u{1cc00}', to: '\u{1ccd5}' },
    Range { from: '\u{1ccd6}', to: '\u{1ccf9}' },
    Range { from: '\u{1ccfa}', to: '\u{1ccfc}' },
    Range { from: '\u{1ccfd}', to: '\u{1ccff}' },
    Range { from: '\u{1cd00}', to: '\u{1ceb3}' },
    Range { from: '\u{1ceb4}', to: '\u{1ceb9}' },
    Range { from: '\u{1ceba}', to: '\u{1ced0}' },
    Range { from: '\u{1ced1}', to: '\u{1cedf}' },
    Range { from: '\u{1cee0}', to: '\u{1cef0}' },
    Range { from: '\u{1cef1}', to: '\u{1ceff}' },
    Range { from: '\u{1cf00}', to: '\u{1cf2d}' },
    Range { from: '\u{1cf2e}', to: '\u{1cf2f}' },
    Range { from: '\u{1cf30}', to: '\u{1cf46}' },
    Range { from: '\u{1cf47}', to: '\u{1cf4f}' },
    Range { from: '\u{1cf50}', to: '\u{1cfc3}' },
    Range { from: '\u{1cfc4}', to: '\u{1cfff}' },
    Range { from: '\u{1d000}', to: '\u{1d0f5}' },
    Range { from: '\u{1d0f6}', to: '\u{1d0ff}' },
    Range { from: '\u{1d100}', to: '\u{1d126}' },
    Range { from: '\u{1d127}', to: '\u{1d128}' },
    Range { from: '\u{1d129}', to: '\u{1d15d}' },
    Range { from: '\u{1d15e}', to: '\u{1d164}' },
    Range { from: '\u{1d165}', to: '\u{1d172}' },
    Range { from: '\u{1d173}', to: '\u{1d17a}' },
    Range { from: '\u{1d17b}', to: '\u{1d1ba}' },
    Range { from: '\u{1d1bb}', to: '\u{1d1c0}' },
    Range { from: '\u{1d1c1}', to: '\u{1d1ea}' },
    Range { from: '\u{1d1eb}', to: '\u{1d1ff}' },
    Range { from: '\u{1d200}', to: '\u{1d245}' },
    Range { from: '\u{1d246}', to: '\u{1d2bf}' },
    Range { from: '\u{1d2c0}', to: '\u{1d2d3}' },
    Range { from: '\u{1d2d4}', to: '\u{1d2df}' },
    Range { from: '\u{1d2e0}', to: '\u{1d2f3}' },
    Range { from: '\u{1d2f4}', to: '\u{1d2ff}' },
    Range { from: '\u{1d300}', to: '\u{1d356}' },
    Range { from: '\u{1d357}', to: '\u{1d35f}' },
    Range { from: '\u{1d360}', to: '\u{1d378}' },
    Range { from: '\u{1d379}', to: '\u{1d3ff}' },
    Range { from: '\u{1d400}', to: '\u{1d546}' },
    Range { from: '\u{1d547}', to: '\u{1d549}' },
    Range { from: '\u{1d54a}', to: '\u{1d7ff}' },
    Range { from: '\u{1d800}', to: '\u{1da8b}' },
    Range { from: '\u{1da8c}', to: '\u{1da9a}' },
    Range { from: '\u{1da9b}', to: '\u{1da9f}' },
    Range { from: '\u{1daa0}', to: '\u{1daa0}' },
    Range { from: '\u{1daa1}', to: '\u{1daaf}' },
    Range { from: '\u{1dab0}', to: '\u{1deff}' },
    Range { from: '\u{1df00}', to: '\u{1df1e}' },
    Range { from: '\u{1df1f}', to: '\u{1df24}' },
    Range { from: '\u{1df25}', to: '\u{1df2a}' },
    Range { from: '\u{1df2b}', to: '\u{1dfff}' },
    Range { from: '\u{1e000}', to: '\u{1e006}' },
    Range { from: '\u{1e007}', to: '\u{1e007}' },
    Range { from: '\u{1e008}', to: '\u{1e018}' },
    Range { from: '\u{1e019}', to: '\u{1e01a}' },
    Range { from: '\u{1e01b}', to: '\u{1e021}' },
    Range { from: '\u{1e022}', to: '\u{1e025}' },
    Range { from: '\u{1e026}', to: '\u{1e02a}' },
    Range { from: '\u{1e02b}', to: '\u{1e02f}' },
    Range { from: '\u{1e030}', to: '\u{1e06d}' },
    Range { from: '\u{1e06e}', to: '\u{1e08e}' },
    Range { from: '\u{1e08f}', to: '\u{1e08f}' },
    Range { from: '\u{1e090}', to: '\u{1e0ff}' },
    Range { from: '\u{1e100}', to: '\u{1e12c}' },
    Range { from: '\u{1e12d}', to: '\u{1e12f}' },
    Range { from: '\u{1e130}', to: '\u{1e13d}' },
    Range { from: '\u{1e13e}', to: '\u{1e13f}' },
    Range { from: '\u{1e140}', to: '\u{1e149}' },
    Range { from: '\u{1e14a}', to: '\u{1e14d}' },
    Range { from: '\u{1e14e}', to: '\u{1e14f}' },
    Range { from: '\u{1e150}', to: '\u{1e28f}' },
    Range { from: '\u{1e290}', to: '\u{1e2ae}' },
    Range { from: '\u{1e2af}', to: '\u{1e2bf}' },
    Range { from: '\u{1e2c0}', to: '\u{1e2f9}' },
    Range { from: '\u{1e2fa}', to: '\u{1e2fe}' },
    Range { from: '\u{1e2ff}', to: '\u{1e2ff}' },
    Range { from: '\u{1e300}', to: '\u{1e4cf}' },
    Range { from: '\u{1e4d0}', to: '\u{1e4f9}' },
    Range { from: '\u{1e4fa}', to: '\u{1e5cf}' },
    Range { from: '\u{1e5d0}', to: '\u{1e5fa}' },
    Range { from: '\u{1e5fb}', to: '\u{1e5fe}' },
    Range { from: '\u{1e5ff}', to: '\u{1e5ff}' },
    Range { from: '\u{1e600}', to: '\u{1e6bf}' },
    Range { from: '\u{1e6c0}', to: '\u{1e6de}' },
    Range { from: '\u{1e6df}', to: '\u{1e6df}' },
    Range { from: '\u{1e6e0}', to: '\u{1e6f5}' },
    Range { from: '\u{1e6f6}', to: '\u{1e6fd}' },
    Range { from: '\u{1e6fe}', to: '\u{1e6ff}' },
    Range { from: '\u{1e700}', to: '\u{1e7df}' },
    Range { from: '\u{1e7e0}', to: '\u{1e7e6}' },
    Range { from: '\u{1e7e7}', to: '\u{1e7e7}' },
    Range { from: '\u{1e7e8}', to: '\u{1e7eb}' },
    Range { from: '\u{1e7ec}', to: '\u{1e7ef}' },
    Range { from: '\u{1e7f0}', to: '\u{1e7fe}' },
    Range { from: '\u{1e7ff}', to: '\u{1e7ff}' },
    Range { from: '\u{1e800}', to: '\u{1e8c4}' },
    Range { from: '\u{1e8c5}', to: '\u{1e8c6}' },
    Range { from: '\u{1e8c7}', to: '\u{1e8d6}' },
    Range { from: '\u{1e8d7}', to: '\u{1e8ff}' },
    Range { from: '\u{1e900}', to: '\u{1e921}' },
    Range { from: '\u{1e922}', to: '\u{1e94b}' },
    Range { from: '\u{1e94c}', to: '\u{1e94f}' },
    Range { from: '\u{1e950}', to: '\u{1e959}' },
    Range { from: '\u{1e95a}', to: '\u{1e95d}' },
    Range { from: '\u{1e95e}', to: '\u{1e95f}' },
    Range { from: '\u{1e960}', to: '\u{1ec70}' },
    Range { from: '\u{1ec71}', to: '\u{1ecb4}' },
    Range { from: '\u{1ecb5}', to: '\u{1ed00}' },
    Range { from: '\u{1ed01}', to: '\u{1ed3d}' },
    Range { from: '\u{1ed3e}', to: '\u{1edff}' },
    Range { from: '\u{1ee00}', to: '\u{1ee3b}' },
    Range { from: '\u{1ee3c}', to: '\u{1ee41}' },
    Range { from: '\u{1ee42}', to: '\u{1ee42}' },
    Range { from: '\u{1ee43}', to: '\u{1ee46}' },
    Range { from: '\u{1ee47}', to: '\u{1ee9b}' },
    Range { from: '\u{1ee9c}', to: '\u{1eea0}' },
    Range { from: '\u{1eea1}', to: '\u{1eebb}' },
    Range { from: '\u{1eebc}', to: '\u{1eeef}' },
    Range { from: '\u{1eef0}', to: '\u{1eef1}' },
    Range { from: '\u{1eef2}', to: '\u{1efff}' },
    Range { from: '\u{1f000}', to: '\u{1f02b}' },
    Range { from: '\u{1f02c}', to: '\u{1f02f}' },
    Range { from: '\u{1f030}', to: '\u{1f093}' },
    Range { from: '\u{1f094}', to: '\u{1f09f}' },
    Range { from: '\u{1f0a0}', to: '\u{1f0ae}' },
    Range { from: '\u{1f0af}', to: '\u{1f0b0}' },
    Range { from: '\u{1f0b1}', to: '\u{1f0bf}' },
    Range { from: '\u{1f0c0}', to: '\u{1f0c0}' },
    Range { from: '\u{1f0c1}', to: '\u{1f0cf}' },
    Range { from: '\u{1f0d0}', to: '\u{1f0d0}' },
    Range { from: '\u{1f0d1}', to: '\u{1f0f5}' },
    Range { from: '\u{1f0f6}', to: '\u{1f100}' },
    Range { from: '\u{1f101}', to: '\u{1f10a}' },
    Range { from: '\u{1f10b}', to: '\u{1f10f}' },
    Range { from: '\u{1f110}', to: '\u{1f14f}' },
    Range { from: '\u{1f150}', to: '\u{1f169}' },
    Range { from: '\u{1f16a}', to: '\u{1f16c}' },
    Range { from: '\u{1f16d}', to: '\u{1f18f}' },
    Range { from: '\u{1f190}', to: '\u{1f190}' },
    Range { from: '\u{1f191}', to: '\u{1f1ad}' },
    Range { from: '\u{1f1ae}', to: '\u{1f1e5}' },
    Range { from: '\u{1f1e6}', to: '\u{1f1ff}' },
    Range { from: '\u{1f200}', to: '\u{1f202}' },
    Range { from: '\u{1f203}', to: '\u{1f20f}' },
    Range { from: '\u{1f210}', to: '\u{1f23b}' },
    Range { from: '\u{1f23c}', to: '\u{1f23f}' },
    Range { from: '\u{1f240}', to: '\u{1f248}' },
    Range { from: '\u{1f249}', to: '\u{1f24f}' },
    Range { from: '\u{1f250}', to: '\u{1f251}' },
    Range { from: '\u{1f252}', to: '\u{1f25f}' },
    Range { from: '\u{1f260}', to: '\u{1f265}' },
    Range { from: '\u{1f266}', to: '\u{1f2ff}' },
    Range { from: '\u{1f300}', to: '\u{1f6d8}' },
    Range { from: '\u{1f6d9}', to: '\u{1f6db}' },
    Range { from: '\u{1f6dc}', to: '\u{1f6ec}' },
    Range { from: '\u{1f6ed}', to: '\u{1f6ef}' },
    Range { from: '\u{1f6f0}', to: '\u{1f6fc}' },
    Range { from: '\u{1f6fd}', to: '\u{1f6ff}' },
    Range { from: '\u{1f700}', to: '\u{1f7d9}' },
    Range { from: '\u{1f7da}', to: '\u{1f7df}' },
    Range { from: '\u{1f7e0}', to: '\u{1f7eb}' },
    Range { from: '\u{1f7ec}', to: '\u{1f7ef}' },
    Range { from: '\u{1f7f0}', to: '\u{1f7f0}' },
    Range { from: '\u{1f7f1}', to: '\u{1f7ff}' },
    Range { from: '\u{1f800}', to: '\u{1f80b}' },
    Range { from: '\u{1f80c}', to: '\u{1f80f}' },
    Range { from: '\u{1f810}', to: '\u{1f847}' },
    Range { from: '\u{1f848}', to: '\u{1f84f}' },
    Range { from: '\u{1f850}', to: '\u{1f859}' },
    Range { from: '\u{1f85a}', to: '\u{1f85f}' },
    Range { from: '\u{1f860}', to: '\u{1f887}' },
    Range { from: '\u{1f888}', to: '\u{1f88f}' },
    Range { from: '\u{1f890}', to: '\u{1f8ad}' },
    Range { from: '\u{1f8ae}', to: '\u{1f8af}' },
    Range { from: '\u{1f8b0}', to: '\u{1f8bb}' },
    Range { from: '\u{1f8bc}', to: '\u{1f8bf}' },
    Range { from: '\u{1f8c0}', to: '\u{1f8c1}' },
    Range { from: '\u{1f8c2}', to: '\u{1f8cf}' },
    Range { from: '\u{1f8d0}', to: '\u{1f8d8}' },
    Range { from: '\u{1f8d9}', to: '\u{1f8ff}' },
    Range { from: '\u{1f900}', to: '\u{1fa57}' },
    Range { from: '\u{1fa58}', to: '\u{1fa5f}' },
    Range { from: '\u{1fa60}', to: '\u{1fa6d}' },
    Range { from: '\u{1fa6e}', to: '\u{1fa6f}' },
    Range { from: '\u{1fa70}', to: '\u{1fa7c}' },
    Range { from: '\u{1fa7d}', to: '\u{1fa7f}' },
    Range { from: '\u{1fa80}', to: '\u{1fa8a}' },
    Range { from: '\u{1fa8b}', to: '\u{1fa8d}' },
    Range { from: '\u{1fa8e}', to: '\u{1fac6}' },
    Range { from: '\u{1fac7}', to: '\u{1fac8}' },
    Range { from: '\u{1fac9}', to: '\u{1facc}' },
    Range { from: '\u{1facd}', to: '\u{1fadc}' },
    Range { from: '\u{1fadd}', to: '\u{1fade}' },
    Range { from: '\u{1fadf}', to: '\u{1faea}' },
    Range { from: '\u{1faeb}', to: '\u{1faee}' },
    Range { from: '\u{1faef}', to: '\u{1faf8}' },
    Range { from: '\u{1faf9}', to: '\u{1faff}' },
    Range { from: '\u{1fb00}', to: '\u{1fb92}' },
    Range { from: '\u{1fb93}', to: '\u{1fb93}' },
    Range { from: '\u{1fb94}', to: '\u{1fbef}' },
    Range { from: '\u{1fbf0}', to: '\u{1fbfa}' },
    Range { from: '\u{1fbfb}', to: '\u{1ffff}' },
    Range { from: '\u{20000}', to: '\u{2a6df}' },
    Range { from: '\u{2a6e0}', to: '\u{2a6ff}' },
    Range { from: '\u{2a700}', to: '\u{2b81d}' },
    Range { from: '\u{2b81e}', to: '\u{2b81f}' },
    Range { from: '\u{2b820}', to: '\u{2cead}' },
    Range { from: '\u{2ceae}', to: '\u{2ceaf}' },
    Range { from: '\u{2ceb0}', to: '\u{2ebe0}' },
    Range { from: '\u{2ebe1}', to: '\u{2ebef}' },
    Range { from: '\u{2ebf0}', to: '\u{2ee5d}' },
    Range { from: '\u{2ee5e}', to: '\u{2f7ff}' },
    Range { from: '\u{2f800}', to: '\u{2f830}' },
    Range { from: '\u{2f831}', to: '\u{2f833}' },
    Range { from: '\u{2f834}', to: '\u{2fa1d}' },
    Range { from: '\u{2fa1e}', to: '\u{2ffff}' },
    Range { from: '\u{30000}', to: '\u{3134a}' },
    Range { from: '\u{3134b}', to: '\u{3134f}' },
    Range { from: '\u{31350}', to: '\u{33479}' },
    Range { from: '\u{3347a}', to: '\u{3ffff}' },
    Range { from: '\u{40000}', to: '\u{4ffff}' },
    Range { from: '\u{50000}', to: '\u{5ffff}' },
    Range { from: '\u{60000}', to: '\u{6ffff}' },
    Range { from: '\u{70000}', to: '\u{7ffff}' },
    Range { from: '\u{80000}', to: '\u{8ffff}' },
    Range { from: '\u{90000}', to: '\u{9ffff}' },
    Range { from: '\u{a0000}', to: '\u{affff}' },
    Range { from: '\u{b0000}', to: '\u{bffff}' },
    Range { from: '\u{c0000}', to: '\u{cffff}' },
    Range { from: '\u{d0000}', to: '\u{dffff}' },
    Range { from: '\u{e0000}', to: '\u{e00ff}' },
    Range { from: '\u{e0100}', to: '\u{e01ef}' },
    Range { from: '\u{e01f0}', to: '\u{effff}' },
    Range { from: '\u{f0000}', to: '\u{fffff}' },
    Range { from: '\u{100000}', to: '\u{10ffff}' },
];

static INDEX_TABLE: &[u16] = &[
    32768, 1, 32772, 32768, 5, 32768, 32772, 32768, 32799, 32, 32772, 33,
    32772, 89, 32772, 242, 32772, 271, 32772, 33040, 33041, 33042, 275, 33079,
    312, 32772, 375, 32772, 396, 32772, 405, 32772, 418, 32772, 424, 32772,
    425, 32772, 436, 32799, 438, 32772, 478, 32772, 479, 32772, 576, 32772,
    609, 32772, 816, 32772, 817, 32772, 819, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 820, 32772, 821, 32772, 825, 32772, 826, 32772, 828, 32772,
    32799, 32772, 830, 32772, 832, 32772, 834, 32772, 835, 32772, 32799, 32772,
    32799, 32772, 839, 32772, 840, 32772, 848, 32772, 849, 32772, 855, 32772,
    856, 32799, 32772, 858, 32772, 860, 32772, 32799, 866, 32799, 867, 32772,
    871, 32772, 873, 32772, 875, 32772, 32799, 876, 32772, 880, 32772, 881,
    32772, 32799, 894, 32772, 32799, 898, 32799, 899, 32799, 32772, 32799, 32772,
    905, 32772, 906, 32772, 907, 32772, 908, 32772, 909, 32772, 913, 32772,
    915, 32772, 916, 32772, 917, 32799, 32772, 920, 32772, 32799, 32772, 922,
    32772, 923, 32772, 924, 32772, 930, 32772, 931, 32772, 935, 32772, 937,
    32772, 32799, 32772, 32799, 943, 32772, 946, 32772, 32799, 948, 32772, 32799,
    32772, 951, 32772, 32799, 952, 32799, 959, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 961, 32772, 962, 32799, 965, 32799, 32772, 32799, 32772,
    966, 32772, 967, 32772, 968, 32772, 969, 32772, 971, 32772, 972, 32772,
    32799, 973, 32772, 976, 32772, 981, 32772, 32799, 32772, 983, 32772, 984,
    32772, 985, 32772, 986, 32772, 987, 32772, 989, 32772, 990, 32772, 32799,
    991, 32799, 32772, 993, 32772, 994, 32772, 996, 32772, 32799, 32772, 997,
    32772, 998, 32772, 999, 32772, 1000, 32772, 32799, 32772, 1001, 32772, 1003,
    32772, 1004, 32772, 32799, 32772, 1005, 32772, 1006, 32772, 32799, 1010, 32799,
    32772, 1011, 32772, 32799, 32772, 1014, 32772, 32799, 32772, 1016, 32772, 32799,
    32772, 32799, 1017, 32772, 1022, 32772, 1023, 32772, 1026, 32772, 1027, 32772,
    1029, 32772, 1032, 32772, 1033, 32799, 32772, 1039, 32772, 1040, 32772, 1041,
    32772, 1042, 32772, 1043, 32772, 1044, 32772, 1045, 32772, 1046, 32772, 32799,
    1047, 32772, 1056, 32772, 1057, 32772, 1058, 32772, 1059, 32772, 1060, 32772,
    1061, 32772, 1062, 32772, 1063, 32772, 1064, 32772, 1065, 32772, 32799, 32772,
    1066, 32799, 1106, 32772, 1109, 32772, 1110, 32772, 1112, 32772, 1113, 32772,
    1115, 32772, 1118, 32772, 1120, 32772, 1121, 32772, 1123, 32772, 1124, 32772,
    1126, 32772, 1129, 32772, 1131, 32772, 1132, 32772, 1133, 32772, 1135, 32772,
    32799, 32772, 32799, 32772, 1137, 32772, 1147, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 32799, 32772, 32799, 32772, 1148, 32772, 1149, 32799, 32772, 1152,
    32772, 1154, 32772, 32799, 32772, 32799, 32772, 33924, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 1157, 32772, 32799, 32772, 32799, 1158, 32799,
    32772, 1159, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 1161,
    32772, 1163, 32772, 1164, 32772, 32799, 32772, 32799, 32772, 1166, 32772, 1168,
    32772, 32799, 32772, 1170, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 1171,
    32799, 1182, 32772, 32799, 32772, 32799, 32772, 1230, 32772, 1293, 32772, 1294,
    32772, 1331, 32772, 1480, 32772, 1581, 32772, 1589, 32772, 1599, 32772, 1607,
    32772, 1615, 32772, 1625, 32772, 1633, 32772, 1737, 32772, 1750, 32772, 1751,
    34543, 1776, 32772, 1783, 32772, 32799, 1784, 32799, 1785, 32772, 1786, 32772,
    1791, 32772, 1794, 32772, 1797, 32772, 1798, 33924, 32799, 33924, 1799, 32799,
    32772, 1844, 32772, 32799, 32772, 32799, 1845, 34624, 1857, 34637, 1870, 32772,
    1905, 32772, 1910, 32772, 1958, 32772, 1959, 32799, 32772, 1962, 32772, 1967,
    32772, 1968, 32772, 1970, 32772, 32799, 32772, 32799, 1972, 32799, 2012, 32772,
    2091, 32772, 2092, 32772, 2095, 32772, 2096, 32772, 2098, 32772, 2146, 32772,
    2168, 32772, 2271, 32772, 2274, 32799, 32772, 2276, 32799, 2278, 32772, 32799,
    2281, 32799, 32772, 32799, 32772, 2283, 32772, 2284, 32772, 2285, 32772, 2286,
    32772, 2287, 32772, 2288, 32772, 2289, 32772, 2290, 32772, 32799, 32772, 2291,
    32772, 2292, 32772, 2293, 32799, 2294, 32799, 2508, 32772, 2511, 32772, 2516,
    32772, 2517, 32772, 2526, 32799, 32772, 2527, 32772, 32799, 32772, 2639, 32772,
    2711, 32772, 32799, 32772, 32799, 32772, 32799, 3143, 32772, 3188, 32772, 32799,
    32772, 3218, 32772, 3231, 32772, 3294, 32772, 3308, 32772, 3316, 32799, 3387,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 3396, 32772, 32799, 32772, 3397, 32772, 32799, 32772, 3398,
    32772, 3400, 32772, 32799, 32772, 32799, 32772, 3402, 32772, 3404, 32772, 32799,
    32772, 3406, 32772, 3407, 32772, 3408, 32772, 3412, 32799, 3415, 32772, 3495,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32799, 3497, 32772, 3792,
    32799, 3968, 32799, 3975, 32799, 3980, 36801, 36802, 36803, 36804, 36805, 36806,
    36807, 36808, 36809, 36810, 36811, 36812, 4045, 36825, 36826, 36827, 36828, 4061,
    36831, 4064, 36834, 36835, 4068, 32772, 36840, 4073, 36854, 4087, 36869, 36870,
    36871, 4104, 32772, 4422, 32772, 32799, 4542, 32772, 33924, 4555, 32799, 32772,
    4564, 37357, 37358, 4591, 32799, 4619, 37412, 4645, 37415, 4648, 37418, 37419,
    37420, 37421, 37422, 4655, 37431, 37432, 37433, 37434, 37435, 37436, 37437, 37438,
    37439, 37440, 37441, 37442, 37443, 37444, 37445, 4678, 37450, 4683, 32799, 4885,
    32799, 4912, 32799, 32772, 4927, 32772, 4928, 32772, 4929, 32772, 4933, 32772,
    32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 4935, 32772, 32799, 4936,
    32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 32799, 32772, 4937, 32772, 32799, 32772, 32799, 4938, 32772, 4978,
    32772, 32799, 4980, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 5016, 32772,
    5056, 32772, 5057, 32772, 5058, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 5061, 32799, 32772, 5120, 32772, 5124, 32799, 5127, 32772, 5130,
    32772, 32799, 32772, 32799, 32772, 5131, 32799, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 32799, 32772, 5134, 32772, 5136, 32799, 32772, 5139, 32772, 5140,
    32772, 5141, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 5143, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 5145, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 5196, 32799, 32772, 32799, 5218, 32799, 32772, 5220, 32772, 5221, 32772,
    5222, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 5226, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 5227, 32772, 32799, 32772, 32799, 32772, 5228,
    32772, 32799, 32772, 5229, 32772, 32799, 32772, 5230, 32772, 5233, 32772, 5234,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 5235, 32772, 5236, 32772, 5242,
    32772, 5243, 32772, 5247, 32772, 5248, 32772, 5254, 32799, 5257, 32799, 32772,
    5258, 32772, 32799, 32772, 32799, 32772, 5260, 32772, 5266, 32772, 5267, 32772,
    5273, 32772, 5274, 32799, 5277, 32799, 32772, 5279, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 5280, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 5282, 32772, 32799, 32772, 32799,
    32772, 32799, 5284, 32772, 32799, 32772, 5316, 32772, 5321, 32772, 5325, 32772,
    32799, 32772, 32799, 32772, 5330, 32772, 5332, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772,
    5334, 32772, 5335, 32772, 32799, 32772, 32799, 32772, 5336, 32772, 5338, 32772,
    32799, 32772, 5339, 32772, 32799, 5343, 32772, 32799, 32772, 32799, 32772, 5348,
    32772, 5352, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 5356, 32772, 32799, 32772, 32799, 5357, 32799, 32772, 32799, 32772, 32799,
    32772, 5358, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 5359, 32772, 32799,
    32772, 5360, 32772, 32799, 32772, 5361, 32772, 32799, 32772, 32799, 32772, 5363,
    32772, 5364, 32772, 32799, 32772, 32799, 32772, 32799, 5365, 32772, 32799, 5397,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 5424, 32772, 5425, 32772, 32799,
    5429, 32799, 32772, 5430, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772,
    32799, 32772, 32799, 32772, 5433, 32772, 33924, 32799, 32772, 5435, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 5471, 32772, 32799, 32772, 32799,
    32772, 32799, 32772, 5473, 32772, 5475, 32772, 33924, 32772, 5482, 32772, 32799,
    32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 5488, 32799,
    5815, 32772, 32799, 32772, 6509, 32772, 32799, 32772, 32799, 32772, 32799, 32772,
    6510, 32772, 6511, 32772, 6513, 32772, 32799, 6517, 32799, 6579, 32799, 32772,
    32799, 32772, 6580, 32772, 32799, 6582, 32799, 32772, 32799, 32772, 32799, 6584,
    32799, 32772, 32799, 32772, 32799, 6585, 32799, 32772, 6586, 32772, 32799, 6587,
    32799, 32772, 6589, 32772, 6590, 32772, 6594, 32772, 6595, 32772, 32799, 6597,
    32772, 32799, 32772, 32799, 6631, 32799, 32772, 32799, 32772, 32799, 6633, 32799,
    6693, 32799, 6694, 32799, 6779, 32799, 6806, 32799, 32772, 32799, 32772, 32799,
    32772, 6808, 32772, 6810, 32772, 6811, 32772, 32799, 6812, 32772, 6822, 32772,
    6886, 32772, 6889, 32772, 32799, 32772, 6890, 32799, 6893, 32799, 6937, 32799,
    6946, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 32799, 6948, 32799, 32772, 32799, 32772, 32799, 32772, 32799, 32772, 32799,
    32772, 6949, 32772, 32799, 6951, 32799, 32772, 32799, 32772, 32799, 32772, 6953,
    32772, 32799, 32772, 32799, 32772, 6955, 32799, 32772, 6957, 32772, 32799, 32772,
    32799, 32772, 6959, 32772, 6960, 32799, 32772, 32799, 32772, 6971, 32772, 6973,
    32772, 32799, 32772, 32799, 6975, 39792, 7025, 32799, 32772, 32799, 32772, 32799,
    32799, 32799, 32799, 32799, 32799, 32799, 32799, 32799, 32799, 32799, 32799, 33924,
    32799, 32799, 32799,
];

static MAPPING_TABLE: &[Mapping] = &[
    DisallowedStd3Valid,
    Valid,
    Valid,
    DisallowedStd3Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 0, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 0, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Valid,
    Ignored,
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 0, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 0, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 0, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 0, byte_len: 5 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 0, byte_len: 2 }),
    Deviation(StringTableSlice { byte_start_lo: 119, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 0, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 1, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 1, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 1, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 1, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 1, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Ignored,
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Disallowed,
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 1, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 1, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 1, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 0, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 1, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 2, byte_len: 2 }),
    Deviation(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 3, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 3, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 3, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 3, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 3, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 3, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 3, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 4, byte_len: 6 }),
    Valid,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Valid,
    Disallowed,
    Valid,
    Valid,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 4, byte_len: 6 }),
    Valid,
    Valid,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 4, byte_len: 6 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 4, byte_len: 6 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 4, byte_len: 6 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 4, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 4, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 4, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 4, byte_len: 6 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 4, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 5, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 5, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 5, byte_len: 3 }),
    Ignored,
    Ignored,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 5, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Ignored,
    Ignored,
    Disallowed,
    Disallowed,
    Ignored,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 5, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 5, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 5, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 6, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 6, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 7, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 7, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 7, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 7, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 7, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 8, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 8, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 8, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 8, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 8, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 8, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 8, byte_len: 5 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 8, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 8, byte_len: 4 }),
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 8, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 8, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 8, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 8, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 8, byte_len: 4 }),
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 8, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 8, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 8, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 8, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 9, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 9, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 9, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 9, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 9, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 1, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 9, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 9, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 9, byte_len: 4 }),
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 9, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 0, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 9, byte_len: 3 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 0, byte_len: 1 }),
    Ignored,
    Deviation(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 0 }),
    Deviation(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 0 }),
    Disallowed,
    Disallowed,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 9, byte_len: 3 }),
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 9, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 9, byte_len: 9 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 9, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 9, byte_len: 9 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 9, byte_len: 2 }),
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 9, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 9, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 9, byte_len: 12 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 9, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 9, byte_len: 3 }),
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 1, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 9, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 9, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 9, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 9, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 0, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 10, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 10, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 10, byte_len: 5 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 10, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 10, byte_len: 9 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 10, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 10, byte_len: 9 }),
    DisallowedStd3Valid,
    DisallowedStd3Valid,
    DisallowedStd3Valid,
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 10, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 10, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 10, byte_len: 12 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 10, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 10, byte_len: 5 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 11, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 11, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 6, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 11, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 11, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 11, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 11, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 12, byte_len: 3 }),
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 14, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 0, byte_len: 1 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 14, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 14, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 14, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 14, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 14, byte_len: 4 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 14, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 14, byte_len: 6 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 15, byte_len: 3 }),
    Ignored,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 16, byte_len: 3 }),
    Disallowed,
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 12, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 16, byte_len: 8 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 16, byte_len: 8 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 16, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 17, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 17, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 10, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 17, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 17, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 17, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 17, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 17, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 18, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 18, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 18, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 18, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 18, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 18, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 18, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 18, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 18, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 18, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 18, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 18, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 18, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 18, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 18, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 18, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 18, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 19, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 19, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 19, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 19, byte_len: 18 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 19, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 19, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 19, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 20, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 20, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 19, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 20, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 20, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 20, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 20, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 20, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 21, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 21, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 21, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 21, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 21, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 19, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 21, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 21, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 21, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 22, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 22, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 19, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 22, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 22, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 22, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 22, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 22, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 22, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 22, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 23, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 23, byte_len: 7 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 23, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 23, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 23, byte_len: 6 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 23, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 23, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 23, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 23, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 24, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 5, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 24, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 6, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 6, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 6, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 25, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 0, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 11, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 25, byte_len: 2 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 25, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 26, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 29, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 29, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 29, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 13, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 29, byte_len: 3 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 29, byte_len: 3 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 30, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 30, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 31, byte_len: 4 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 9, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 31, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 31, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 31, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 31, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 31, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 31, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 31, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 31, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 31, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 31, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 3, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 33, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 33, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 33, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 33, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 33, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 33, byte_len: 5 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 33, byte_len: 5 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 32, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 34, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 34, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 32, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 32, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 32, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 33, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 32, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 35, byte_len: 6 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 33, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 35, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 36, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 37, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 37, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 37, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 37, byte_len: 6 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 37, byte_len: 33 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 37, byte_len: 15 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 37, byte_len: 8 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 37, byte_len: 3 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 10, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 1, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 37, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 37, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 37, byte_len: 3 }),
    Valid,
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 9, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 37, byte_len: 3 }),
    Disallowed,
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 1, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 10, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 37, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 37, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 9, byte_len: 1 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 37, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 33, byte_len: 3 }),
    Valid,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 33, byte_len: 3 }),
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 33, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 34, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 33, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 34, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 33, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 34, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 33, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 37, byte_len: 4 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 37, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 37, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Ignored,
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 14, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 10, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 1, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 9, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 37, byte_len: 1 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 37, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 14, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 20, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 20, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 37, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 19, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 21, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 19, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 86, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 14, byte_len: 3 }),
    Ignored,
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 15, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 15, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 15, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 15, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 38, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 38, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 0, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 38, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 38, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 38, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 38, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 38, byte_len: 3 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 38, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 38, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 39, byte_len: 4 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 39, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 39, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 200, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 39, byte_len: 4 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 39, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 39, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 0, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 39, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 39, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 254, byte_start_hi: 39, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 25, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 40, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 11, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 40, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 40, byte_len: 3 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 40, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 40, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 40, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 41, byte_len: 4 }),
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 41, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Valid,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 41, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 95, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 187, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 42, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 42, byte_len: 4 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 42, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 42, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 42, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 42, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 42, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 42, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 43, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 43, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 43, byte_len: 8 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 43, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 43, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 43, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 43, byte_len: 12 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 43, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 89, byte_start_hi: 43, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 1, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 36, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 42, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 43, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 2, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 170, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 30, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 134, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 140, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 178, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 2, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 24, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 3, byte_len: 2 }),
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Valid,
    Valid,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 209, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 43, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 43, byte_len: 4 }),
    Valid,
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 37, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 43, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 43, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 43, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 43, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 43, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 43, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 37, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 37, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 3, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 3, byte_len: 2 }),
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 137, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 34, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 32, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 33, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 33, byte_len: 2 }),
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 251, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 43, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 44, byte_len: 2 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 159, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 225, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 231, byte_start_hi: 10, byte_len: 3 }),
    DisallowedStd3Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 10, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 44, byte_len: 7 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 44, byte_len: 2 }),
    Valid,
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 1, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 7, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 10, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 44, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 44, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 0, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 44, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 23, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 22, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 44, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 44, byte_len: 2 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 44, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 44, byte_len: 6 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 18, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 20, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 58, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 61, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 70, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 16, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 17, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 181, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 44, byte_len: 9 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 44, byte_len: 3 }),
    Valid,
    Disallowed,
    Disallowed,
    Valid,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 0, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 9, byte_len: 1 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 9, byte_len: 1 }),
    Valid,
    Disallowed,
    Disallowed,
    Disallowed,
    Disallowed,
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 44, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 227, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 193, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 44, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 64, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 81, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 97, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 115, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 118, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 121, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 44, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 194, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 211, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 217, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 156, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 45, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 45, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 40, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 43, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 46, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 49, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 52, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 62, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 65, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 68, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 12, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 102, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 105, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 108, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 111, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 114, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 117, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 175, byte_start_hi: 26, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 167, byte_start_hi: 22, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 201, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 204, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 222, byte_start_hi: 46, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 229, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 244, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 253, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 190, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 12, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 247, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 50, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 53, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 56, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 73, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 76, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 207, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 250, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 197, byte_start_hi: 28, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 122, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 125, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 128, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 131, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 141, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 144, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 147, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 150, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 164, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 183, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 186, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 189, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 192, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 196, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 203, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 206, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 210, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 213, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 220, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 47, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 234, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 237, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 240, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 243, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 246, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 249, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 214, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 255, byte_start_hi: 47, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 2, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 5, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 15, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 18, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 37, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 55, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 59, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 78, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 82, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 85, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 88, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 92, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 29, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 100, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 33, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 109, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 112, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 143, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 146, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 152, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 155, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 158, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 162, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 165, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 168, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 171, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 174, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 177, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 180, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 184, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 198, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 219, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 223, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 226, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 230, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 233, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 236, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 239, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 242, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 48, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 48, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 4, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 46, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 8, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 11, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 14, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 20, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 23, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 26, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 29, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 32, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 35, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 216, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 30, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 66, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 69, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 72, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 75, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 79, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 83, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 90, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 93, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 96, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 99, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 103, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 106, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 120, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 124, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 127, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 39, byte_start_hi: 27, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 130, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 133, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 136, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 139, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 148, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 151, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 154, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 13, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 176, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 179, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 182, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 185, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 191, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 195, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 199, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 202, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 205, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 21, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 24, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 17, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 208, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 212, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 215, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 218, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 221, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 224, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 228, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 232, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 235, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 238, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 241, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 245, byte_start_hi: 49, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 27, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 248, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 252, byte_start_hi: 49, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 0, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 3, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 6, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 9, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 13, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 16, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 19, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 22, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 25, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 28, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 31, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 34, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 38, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 41, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 44, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 47, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 51, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 54, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 57, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 60, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 63, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 67, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 71, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 74, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 77, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 80, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 84, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 87, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 45, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 91, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 94, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 98, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 101, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 104, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 107, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 110, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 113, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 116, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 119, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 48, byte_start_hi: 31, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 123, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 126, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 129, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 132, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 135, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 138, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 142, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 145, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 149, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 153, byte_start_hi: 50, byte_len: 4 }),
    Mapped(StringTableSlice { byte_start_lo: 161, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 157, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 173, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 160, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 163, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 166, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 169, byte_start_hi: 50, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 188, byte_start_hi: 14, byte_len: 3 }),
    Mapped(StringTableSlice { byte_start_lo: 172, byte_start_hi: 50, byte_len: 4 }),
];

static STRING_TABLE: &str = "abcdefghijklmnopqrstuvwxyz  \u{308} \u{304}23 \u{301}\u{3bc} \u{327}11\u{2044}41\u{2044}23\u{2044}4\u{e0}\u{e1}\u{e2}\u{e3}\u{e4}\u{e5}\u{e6}\u{e7}\u{e8}\u{e9}\u{ea}\u{eb}\u{ec}\u{ed}\u{ee}\u{ef}\u{f0}\u{f1}\u{f2}\u{f3}\u{f4}\u{f5}\u{f6}\u{f8}\u{f9}\u{fa}\u{fb}\u{fc}\u{fd}\u{fe}ss\u{101}\u{103}\u{105}\u{107}\u{109}\u{10b}\u{10d}\u{10f}\u{111}\u{113}\u{115}\u{117}\u{119}\u{11b}\u{11d}\u{11f}\u{121}\u{123}\u{125}\u{127}\u{129}\u{12b}\u{12d}\u{12f}i\u{307}\u{135}\u{137}\u{13a}\u{13c}\u{13e}l\u{b7}\u{142}\u{144}\u{146}\u{148}\u{2bc}n\u{14b}\u{14d}\u{14f}\u{151}\u{153}\u{155}\u{157}\u{159}\u{15b}\u{15d}\u{15f}\u{161}\u{163}\u{165}\u{167}\u{169}\u{16b}\u{16d}\u{16f}\u{171}\u{173}\u{175}\u{177}\u{ff}\u{17a}\u{17c}\u{17e}\u{253}\u{183}\u{185}\u{254}\u{188}\u{256}\u{257}\u{18c}\u{1dd}\u{259}\u{25b}\u{192}\u{260}\u{263}\u{269}\u{268}\u{199}\u{26f}\u{272}\u{275}\u{1a1}\u{1a3}\u{1a5}\u{280}\u{1a8}\u{283}\u{1ad}\u{288}\u{1b0}\u{28a}\u{28b}\u{1b4}\u{1b6}\u{292}\u{1b9}\u{1bd}d\u{17e}ljnj\u{1ce}\u{1d0}\u{1d2}\u{1d4}\u{1d6}\u{1d8}\u{1da}\u{1dc}\u{1df}\u{1e1}\u{1e3}\u{1e5}\u{1e7}\u{1e9}\u{1eb}\u{1ed}\u{1ef}dz\u{1f5}\u{195}\u{1bf}\u{1f9}\u{1fb}\u{1fd}\u{1ff}\u{201}\u{203}\u{205}\u{207}\u{209}\u{20b}\u{20d}\u{20f}\u{211}\u{213}\u{215}\u{217}\u{219}\u{21b}\u{21d}\u{21f}\u{19e}\u{223}\u{225}\u{227}\u{229}\u{22b}\u{22d}\u{22f}\u{231}\u{233}\u{2c65}\u{23c}\u{19a}\u{2c66}\u{242}\u{180}\u{289}\u{28c}\u{247}\u{249}\u{24b}\u{24d}\u{24f}\u{266}\u{279}\u{27b}\u{281} \u{306} \u{307} \u{30a} \u{328} \u{303} \u{30b}\u{295}\u{300}\u{313}\u{308}\u{301}\u{3b9}\u{371}\u{373}\u{2b9}\u{377} \u{3b9};\u{3f3} \u{308}\u{301}\u{3ac}\u{3ad}\u{3ae}\u{3af}\u{3cc}\u{3cd}\u{3ce}\u{3b1}\u{3b2}\u{3b3}\u{3b4}\u{3b5}\u{3b6}\u{3b7}\u{3b8}\u{3ba}\u{3bb}\u{3bd}\u{3be}\u{3bf}\u{3c0}\u{3c1}\u{3c3}\u{3c4}\u{3c5}\u{3c6}\u{3c7}\u{3c8}\u{3c9}\u{3ca}\u{3cb}\u{3d7}\u{3d9}\u{3db}\u{3dd}\u{3df}\u{3e1}\u{3e3}\u{3e5}\u{3e7}\u{3e9}\u{3eb}\u{3ed}\u{3ef}\u{3f8}\u{3fb}\u{37b}\u{37c}\u{37d}\u{450}\u{451}\u{452}\u{453}\u{454}\u{455}\u{456}\u{457}\u{458}\u{459}\u{45a}\u{45b}\u{45c}\u{45d}\u{45e}\u{45f}\u{430}\u{431}\u{432}\u{433}\u{434}\u{435}\u{436}\u{437}\u{438}\u{439}\u{43a}\u{43b}\u{43c}\u{43d}\u{43e}\u{43f}\u{440}\u{441}\u{442}\u{443}\u{444}\u{445}\u{446}\u{447}\u{448}\u{449}\u{44a}\u{44b}\u{44c}\u{44d}\u{44e}\u{44f}\u{461}\u{463}\u{465}\u{467}\u{469}\u{46b}\u{46d}\u{46f}\u{471}\u{473}\u{475}\u{477}\u{479}\u{47b}\u{47d}\u{47f}\u{481}\u{48b}\u{48d}\u{48f}\u{491}\u{493}\u{495}\u{497}\u{499}\u{49b}\u{49d}\u{49f}\u{4a1}\u{4a3}\u{4a5}\u{4a7}\u{4a9}\u{4ab}\u{4ad}\u{4af}\u{4b1}\u{4b3}\u{4b5}\u{4b7}\u{4b9}\u{4bb}\u{4bd}\u{4bf}\u{4cf}\u{4c2}\u{4c4}\u{4c6}\u{4c8}\u{4ca}\u{4cc}\u{4ce}\u{4d1}\u{4d3}\u{4d5}\u{4d7}\u{4d9}\u{4db}\u{4dd}\u{4df}\u{4e1}\u{4e3}\u{4e5}\u{4e7}\u{4e9}\u{4eb}\u{4ed}\u{4ef}\u{4f1}\u{4f3}\u{4f5}\u{4f7}\u{4f9}\u{4fb}\u{4fd}\u{4ff}\u{501}\u{503}\u{505}\u{507}\u{509}\u{50b}\u{50d}\u{50f}\u{511}\u{513}\u{515}\u{517}\u{519}\u{51b}\u{51d}\u{51f}\u{521}\u{523}\u{525}\u{527}\u{529}\u{52b}\u{52d}\u{52f}\u{561}\u{562}\u{563}\u{564}\u{565}\u{566}\u{567}\u{568}\u{569}\u{56a}\u{56b}\u{56c}\u{56d}\u{56e}\u{56f}\u{570}\u{571}\u{572}\u{573}\u{574}\u{575}\u{576}\u{577}\u{578}\u{579}\u{57a}\u{57b}\u{57c}\u{57d}\u{57e}\u{57f}\u{580}\u{581}\u{582}\u{583}\u{584}\u{585}\u{586}\u{565}\u{582}\u{627}\u{674}\u{648}\u{674}\u{6c7}\u{674}\u{64a}\u{674}\u{915}\u{93c}\u{916}\u{93c}\u{917}\u{93c}\u{91c}\u{93c}\u{921}\u{93c}\u{922}\u{93c}\u{92b}\u{93c}\u{92f}\u{93c}\u{9a1}\u{9bc}\u{9a2}\u{9bc}\u{9af}\u{9bc}\u{a32}\u{a3c}\u{a38}\u{a3c}\u{a16}\u{a3c}\u{a17}\u{a3c}\u{a1c}\u{a3c}\u{a2b}\u{a3c}\u{b21}\u{b3c}\u{b22}\u{b3c}\u{e4d}\u{e32}\u{ecd}\u{eb2}\u{eab}\u{e99}\u{eab}\u{ea1}\u{f0b}\u{f42}\u{fb7}\u{f4c}\u{fb7}\u{f51}\u{fb7}\u{f56}\u{fb7}\u{f5b}\u{fb7}\u{f40}\u{fb5}\u{f71}\u{f72}\u{f71}\u{f74}\u{fb2}\u{f80}\u{fb2}\u{f71}\u{f80}\u{fb3}\u{f80}\u{fb3}\u{f71}\u{f80}\u{f92}\u{fb7}\u{f9c}\u{fb7}\u{fa1}\u{fb7}\u{fa6}\u{fb7}\u{fab}\u{fb7}\u{f90}\u{fb5}\u{2d00}\u{2d01}\u{2d02}\u{2d03}\u{2d04}\u{2d05}\u{2d06}\u{2d07}\u{2d08}\u{2d09}\u{2d0a}\u{2d0b}\u{2d0c}\u{2d0d}\u{2d0e}\u{2d0f}\u{2d10}\u{2d11}\u{2d12}\u{2d13}\u{2d14}\u{2d15}\u{2d16}\u{2d17}\u{2d18}\u{2d19}\u{2d1a}\u{2d1b}\u{2d1c}\u{2d1d}\u{2d1e}\u{2d1f}\u{2d20}\u{2d21}\u{2d22}\u{2d23}\u{2d24}\u{2d25}\u{2d27}\u{2d2d}\u{10dc}\u{13f0}\u{13f1}\u{13f2}\u{13f3}\u{13f4}\u{13f5}\u{a64b}\u{1c8a}\u{10d0}\u{10d1}\u{10d2}\u{10d3}\u{10d4}\u{10d5}\u{10d6}\u{10d7}\u{10d8}\u{10d9}\u{10da}\u{10db}\u{10dd}\u{10de}\u{10df}\u{10e0}\u{10e1}\u{10e2}\u{10e3}\u{10e4}\u{10e5}\u{10e6}\u{10e7}\u{10e8}\u{10e9}\u{10ea}\u{10eb}\u{10ec}\u{10ed}\u{10ee}\u{10ef}\u{10f0}\u{10f1}\u{10f2}\u{10f3}\u{10f4}\u{10f5}\u{10f6}\u{10f7}\u{10f8}\u{10f9}\u{10fa}\u{10fd}\u{10fe}\u{10ff}\u{250}\u{251}\u{1d02}\u{25c}\u{1d16}\u{1d17}\u{1d1d}\u{1d25}\u{252}\u{255}\u{25f}\u{261}\u{265}\u{26a}\u{1d7b}\u{29d}\u{26d}\u{1d85}\u{29f}\u{271}\u{270}\u{273}\u{274}\u{278}\u{282}\u{1ab}\u{1d1c}\u{290}\u{291}\u{1e01}\u{1e03}\u{1e05}\u{1e07}\u{1e09}\u{1e0b}\u{1e0d}\u{1e0f}\u{1e11}\u{1e13}\u{1e15}\u{1e17}\u{1e19}\u{1e1b}\u{1e1d}\u{1e1f}\u{1e21}\u{1e23}\u{1e25}\u{1e27}\u{1e29}\u{1e2b}\u{1e2d}\u{1e2f}\u{1e31}\u{1e33}\u{1e35}\u{1e37}\u{1e39}\u{1e3b}\u{1e3d}\u{1e3f}\u{1e41}\u{1e43}\u{1e45}\u{1e47}\u{1e49}\u{1e4b}\u{1e4d}\u{1e4f}\u{1e51}\u{1e53}\u{1e55}\u{1e57}\u{1e59}\u{1e5b}\u{1e5d}\u{1e5f}\u{1e61}\u{1e63}\u{1e65}\u{1e67}\u{1e69}\u{1e6b}\u{1e6d}\u{1e6f}\u{1e71}\u{1e73}\u{1e75}\u{1e77}\u{1e79}\u{1e7b}\u{1e7d}\u{1e7f}\u{1e81}\u{1e83}\u{1e85}\u{1e87}\u{1e89}\u{1e8b}\u{1e8d}\u{1e8f}\u{1e91}\u{1e93}\u{1e95}a\u{2be}\u{df}\u{1ea1}\u{1ea3}\u{1ea5}\u{1ea7}\u{1ea9}\u{1eab}\u{1ead}\u{1eaf}\u{1eb1}\u{1eb3}\u{1eb5}\u{1eb7}\u{1eb9}\u{1ebb}\u{1ebd}\u{1ebf}\u{1ec1}\u{1ec3}\u{1ec5}\u{1ec7}\u{1ec9}\u{1ecb}\u{1ecd}\u{1ecf}\u{1ed1}\u{1ed3}\u{1ed5}\u{1ed7}\u{1ed9}\u{1edb}\u{1edd}\u{1edf}\u{1ee1}\u{1ee3}\u{1ee5}\u{1ee7}\u{1ee9}\u{1eeb}\u{1eed}\u{1eef}\u{1ef1}\u{1ef3}\u{1ef5}\u{1ef7}\u{1ef9}\u{1efb}\u{1efd}\u{1eff}\u{1f00}\u{1f01}\u{1f02}\u{1f03}\u{1f04}\u{1f05}\u{1f06}\u{1f07}\u{1f10}\u{1f11}\u{1f12}\u{1f13}\u{1f14}\u{1f15}\u{1f20}\u{1f21}\u{1f22}\u{1f23}\u{1f24}\u{1f25}\u{1f26}\u{1f27}\u{1f30}\u{1f31}\u{1f32}\u{1f33}\u{1f34}\u{1f35}\u{1f36}\u{1f37}\u{1f40}\u{1f41}\u{1f42}\u{1f43}\u{1f44}\u{1f45}\u{1f51}\u{1f53}\u{1f55}\u{1f57}\u{1f60}\u{1f61}\u{1f62}\u{1f63}\u{1f64}\u{1f65}\u{1f66}\u{1f67}\u{1f00}\u{3b9}\u{1f01}\u{3b9}\u{1f02}\u{3b9}\u{1f03}\u{3b9}\u{1f04}\u{3b9}\u{1f05}\u{3b9}\u{1f06}\u{3b9}\u{1f07}\u{3b9}\u{1f20}\u{3b9}\u{1f21}\u{3b9}\u{1f22}\u{3b9}\u{1f23}\u{3b9}\u{1f24}\u{3b9}\u{1f25}\u{3b9}\u{1f26}\u{3b9}\u{1f27}\u{3b9}\u{1f60}\u{3b9}\u{1f61}\u{3b9}\u{1f62}\u{3b9}\u{1f63}\u{3b9}\u{1f64}\u{3b9}\u{1f65}\u{3b9}\u{1f66}\u{3b9}\u{1f67}\u{3b9}\u{1f70}\u{3b9}\u{3b1}\u{3b9}\u{3ac}\u{3b9}\u{1fb6}\u{3b9}\u{1fb0}\u{1fb1} \u{313} \u{342} \u{308}\u{342}\u{1f74}\u{3b9}\u{3b7}\u{3b9}\u{3ae}\u{3b9}\u{1fc6}\u{3b9}\u{1f72} \u{313}\u{300} \u{313}\u{301} \u{313}\u{342}\u{390}\u{1fd0}\u{1fd1}\u{1f76} \u{314}\u{300} \u{314}\u{301} \u{314}\u{342}\u{3b0}\u{1fe0}\u{1fe1}\u{1f7a}\u{1fe5} \u{308}\u{300}`\u{1f7c}\u{3b9}\u{3c9}\u{3b9}\u{3ce}\u{3b9}\u{1ff6}\u{3b9}\u{1f78}\u{2010} \u{333}\u{2032}\u{2032}\u{2032}\u{2032}\u{2032}\u{2035}\u{2035}\u{2035}\u{2035}\u{2035}!! \u{305}???!!?056789+\u{2212}=()a/ca/s\u{b0}cc/oc/u\u{b0}fsmteltm\u{214e}\u{5d0}\u{5d1}\u{5d2}\u{5d3}fax\u{2211}1\u{2044}71\u{2044}91\u{2044}101\u{2044}32\u{2044}31\u{2044}52\u{2044}53\u{2044}54\u{2044}51\u{2044}65\u{2044}61\u{2044}83\u{2044}85\u{2044}87\u{2044}8iiiiiivviviiviiiixxixii\u{2184}0\u{2044}3\u{222b}\u{222b}\u{222b}\u{222b}\u{222b}\u{222e}\u{222e}\u{222e}\u{222e}\u{222e}\u{3008}\u{3009}121314151617181920(1)(2)(3)(4)(5)(6)(7)(8)(9)(10)(11)(12)(13)(14)(15)(16)(17)(18)(19)(20)(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)(l)(m)(n)(o)(p)(q)(r)(s)(t)(u)(v)(w)(x)(y)(z)::===\u{2add}\u{338}\u{2c30}\u{2c31}\u{2c32}\u{2c33}\u{2c34}\u{2c35}\u{2c36}\u{2c37}\u{2c38}\u{2c39}\u{2c3a}\u{2c3b}\u{2c3c}\u{2c3d}\u{2c3e}\u{2c3f}\u{2c40}\u{2c41}\u{2c42}\u{2c43}\u{2c44}\u{2c45}\u{2c46}\u{2c47}\u{2c48}\u{2c49}\u{2c4a}\u{2c4b}\u{2c4c}\u{2c4d}\u{2c4e}\u{2c4f}\u{2c50}\u{2c51}\u{2c52}\u{2c53}\u{2c54}\u{2c55}\u{2c56}\u{2c57}\u{2c58}\u{2c59}\u{2c5a}\u{2c5b}\u{2c5c}\u{2c5d}\u{2c5e}\u{2c5f}\u{2c61}\u{26b}\u{1d7d}\u{27d}\u{2c68}\u{2c6a}\u{2c6c}\u{2c73}\u{2c76}\u{23f}\u{240}\u{2c81}\u{2c83}\u{2c85}\u{2c87}\u{2c89}\u{2c8b}\u{2c8d}\u{2c8f}\u{2c91}\u{2c93}\u{2c95}\u{2c97}\u{2c99}\u{2c9b}\u{2c9d}\u{2c9f}\u{2ca1}\u{2ca3}\u{2ca5}\u{2ca7}\u{2ca9}\u{2cab}\u{2cad}\u{2caf}\u{2cb1}\u{2cb3}\u{2cb5}\u{2cb7}\u{2cb9}\u{2cbb}\u{2cbd}\u{2cbf}\u{2cc1}\u{2cc3}\u{2cc5}\u{2cc7}\u{2cc9}\u{2ccb}\u{2ccd}\u{2ccf}\u{2cd1}\u{2cd3}\u{2cd5}\u{2cd7}\u{2cd9}\u{2cdb}\u{2cdd}\u{2cdf}\u{2ce1}\u{2ce3}\u{2cec}\u{2cee}\u{2cf3}\u{2d61}\u{6bcd}\u{9f9f}\u{4e00}\u{4e28}\u{4e36}\u{4e3f}\u{4e59}\u{4e85}\u{4e8c}\u{4ea0}\u{4eba}\u{513f}\u{5165}\u{516b}\u{5182}\u{5196}\u{51ab}\u{51e0}\u{51f5}\u{5200}\u{529b}\u{52f9}\u{5315}\u{531a}\u{5338}\u{5341}\u{535c}\u{5369}\u{5382}\u{53b6}\u{53c8}\u{53e3}\u{56d7}\u{571f}\u{58eb}\u{5902}\u{590a}\u{5915}\u{5927}\u{5973}\u{5b50}\u{5b80}\u{5bf8}\u{5c0f}\u{5c22}\u{5c38}\u{5c6e}\u{5c71}\u{5ddb}\u{5de5}\u{5df1}\u{5dfe}\u{5e72}\u{5e7a}\u{5e7f}\u{5ef4}\u{5efe}\u{5f0b}\u{5f13}\u{5f50}\u{5f61}\u{5f73}\u{5fc3}\u{6208}\u{6236}\u{624b}\u{652f}\u{6534}\u{6587}\u{6597}\u{65a4}\u{65b9}\u{65e0}\u{65e5}\u{66f0}\u{6708}\u{6728}\u{6b20}\u{6b62}\u{6b79}\u{6bb3}\u{6bcb}\u{6bd4}\u{6bdb}\u{6c0f}\u{6c14}\u{6c34}\u{706b}\u{722a}\u{7236}\u{723b}\u{723f}\u{7247}\u{7259}\u{725b}\u{72ac}\u{7384}\u{7389}\u{74dc}\u{74e6}\u{7518}\u{751f}\u{7528}\u{7530}\u{758b}\u{7592}\u{7676}\u{767d}\u{76ae}\u{76bf}\u{76ee}\u{77db}\u{77e2}\u{77f3}\u{793a}\u{79b8}\u{79be}\u{7a74}\u{7acb}\u{7af9}\u{7c73}\u{7cf8}\u{7f36}\u{7f51}\u{7f8a}\u{7fbd}\u{8001}\u{800c}\u{8012}\u{8033}\u{807f}\u{8089}\u{81e3}\u{81ea}\u{81f3}\u{81fc}\u{820c}\u{821b}\u{821f}\u{826e}\u{8272}\u{8278}\u{864d}\u{866b}\u{8840}\u{884c}\u{8863}\u{897e}\u{898b}\u{89d2}\u{8a00}\u{8c37}\u{8c46}\u{8c55}\u{8c78}\u{8c9d}\u{8d64}\u{8d70}\u{8db3}\u{8eab}\u{8eca}\u{8f9b}\u{8fb0}\u{8fb5}\u{9091}\u{9149}\u{91c6}\u{91cc}\u{91d1}\u{9577}\u{9580}\u{961c}\u{96b6}\u{96b9}\u{96e8}\u{9751}\u{975e}\u{9762}\u{9769}\u{97cb}\u{97ed}\u{97f3}\u{9801}\u{98a8}\u{98db}\u{98df}\u{9996}\u{9999}\u{99ac}\u{9aa8}\u{9ad8}\u{9adf}\u{9b25}\u{9b2f}\u{9b32}\u{9b3c}\u{9b5a}\u{9ce5}\u{9e75}\u{9e7f}\u{9ea5}\u{9ebb}\u{9ec3}\u{9ecd}\u{9ed1}\u{9ef9}\u{9efd}\u{9f0e}\u{9f13}\u{9f20}\u{9f3b}\u{9f4a}\u{9f52}\u{9f8d}\u{9f9c}\u{9fa0}.\u{3012}\u{5344}\u{5345} \u{3099} \u{309a}\u{3088}\u{308a}\u{30b3}\u{30c8}\u{1100}\u{1101}\u{11aa}\u{1102}\u{11ac}\u{11ad}\u{1103}\u{1104}\u{1105}\u{11b0}\u{11b1}\u{11b2}\u{11b3}\u{11b4}\u{11b5}\u{111a}\u{1106}\u{1107}\u{1108}\u{1121}\u{1109}\u{110a}\u{110b}\u{110c}\u{110d}\u{110e}\u{110f}\u{1110}\u{1111}\u{1112}\u{1161}\u{1162}\u{1163}\u{1164}\u{1165}\u{1166}\u{1167}\u{1168}\u{1169}\u{116a}\u{116b}\u{116c}\u{116d}\u{116e}\u{116f}\u{1170}\u{1171}\u{1172}\u{1173}\u{1174}\u{1175}\u{1114}\u{1115}\u{11c7}\u{11c8}\u{11cc}\u{11ce}\u{11d3}\u{11d7}\u{11d9}\u{111c}\u{11dd}\u{11df}\u{111d}\u{111e}\u{1120}\u{1122}\u{1123}\u{1127}\u{1129}\u{112b}\u{112c}\u{112d}\u{112e}\u{112f}\u{1132}\u{1136}\u{1140}\u{1147}\u{114c}\u{11f1}\u{11f2}\u{1157}\u{1158}\u{1159}\u{1184}\u{1185}\u{1188}\u{1191}\u{1192}\u{1194}\u{119e}\u{11a1}\u{4e09}\u{56db}\u{4e0a}\u{4e2d}\u{4e0b}\u{7532}\u{4e19}\u{4e01}\u{5929}\u{5730}(\u{1100})(\u{1102})(\u{1103})(\u{1105})(\u{1106})(\u{1107})(\u{1109})(\u{110b})(\u{110c})(\u{110e})(\u{110f})(\u{1110})(\u{1111})(\u{1112})(\u{ac00})(\u{b098})(\u{b2e4})(\u{b77c})(\u{b9c8})(\u{bc14})(\u{c0ac})(\u{c544})(\u{c790})(\u{cc28})(\u{ce74})(\u{d0c0})(\u{d30c})(\u{d558})(\u{c8fc})(\u{c624}\u{c804})(\u{c624}\u{d6c4})(\u{4e00})(\u{4e8c})(\u{4e09})(\u{56db})(\u{4e94})(\u{516d})(\u{4e03})(\u{516b})(\u{4e5d})(\u{5341})(\u{6708})(\u{706b})(\u{6c34})(\u{6728})(\u{91d1})(\u{571f})(\u{65e5})(\u{682a})(\u{6709})(\u{793e})(\u{540d})(\u{7279})(\u{8ca1})(\u{795d})(\u{52b4})(\u{4ee3})(\u{547c})(\u{5b66})(\u{76e3})(\u{4f01})(\u{8cc7})(\u{5354})(\u{796d})(\u{4f11})(\u{81ea})(\u{81f3})\u{554f}\u{5e7c}\u{7b8f}pte2224252627282930333435\u{cc38}\u{ace0}\u{c8fc}\u{c758}\u{c6b0}\u{79d8}\u{7537}\u{9069}\u{512a}\u{5370}\u{6ce8}\u{9805}\u{5199}\u{6b63}\u{5de6}\u{53f3}\u{533b}\u{5b97}\u{591c}3637383940444546474849501\u{6708}2\u{6708}3\u{6708}4\u{6708}5\u{6708}6\u{6708}7\u{6708}8\u{6708}9\u{6708}10\u{6708}11\u{6708}12\u{6708}hgergevltd\u{30a2}\u{30a4}\u{30a6}\u{30a8}\u{30aa}\u{30ab}\u{30ad}\u{30af}\u{30b1}\u{30b5}\u{30b7}\u{30b9}\u{30bb}\u{30bd}\u{30bf}\u{30c1}\u{30c4}\u{30c6}\u{30ca}\u{30cb}\u{30cc}\u{30cd}\u{30ce}\u{30cf}\u{30d2}\u{30d5}\u{30d8}\u{30db}\u{30de}\u{30df}\u{30e0}\u{30e1}\u{30e2}\u{30e4}\u{30e6}\u{30e8}\u{30e9}\u{30ea}\u{30eb}\u{30ec}\u{30ed}\u{30ef}\u{30f0}\u{30f1}\u{30f2}\u{4ee4}\u{548c}\u{30a2}\u{30d1}\u{30fc}\u{30c8}\u{30a2}\u{30eb}\u{30d5}\u{30a1}\u{30a2}\u{30f3}\u{30da}\u{30a2}\u{30a2}\u{30fc}\u{30eb}\u{30a4}\u{30cb}\u{30f3}\u{30b0}\u{30a4}\u{30f3}\u{30c1}\u{30a6}\u{30a9}\u{30f3}\u{30a8}\u{30b9}\u{30af}\u{30fc}\u{30c9}\u{30a8}\u{30fc}\u{30ab}\u{30fc}\u{30aa}\u{30f3}\u{30b9}\u{30aa}\u{30fc}\u{30e0}\u{30ab}\u{30a4}\u{30ea}\u{30ab}\u{30e9}\u{30c3}\u{30c8}\u{30ab}\u{30ed}\u{30ea}\u{30fc}\u{30ac}\u{30ed}\u{30f3}\u{30ac}\u{30f3}\u{30de}\u{30ae}\u{30ac}\u{30ae}\u{30cb}\u{30fc}\u{30ad}\u{30e5}\u{30ea}\u{30fc}\u{30ae}\u{30eb}\u{30c0}\u{30fc}\u{30ad}\u{30ed}\u{30ad}\u{30ed}\u{30b0}\u{30e9}\u{30e0}\u{30ad}\u{30ed}\u{30e1}\u{30fc}\u{30c8}\u{30eb}\u{30ad}\u{30ed}\u{30ef}\u{30c3}\u{30c8}\u{30b0}\u{30e9}\u{30e0}\u{30c8}\u{30f3}\u{30af}\u{30eb}\u{30bc}\u{30a4}\u{30ed}\u{30af}\u{30ed}\u{30fc}\u{30cd}\u{30b1}\u{30fc}\u{30b9}\u{30b3}\u{30eb}\u{30ca}\u{30b3}\u{30fc}\u{30dd}\u{30b5}\u{30a4}\u{30af}\u{30eb}\u{30b5}\u{30f3}\u{30c1}\u{30fc}\u{30e0}\u{30b7}\u{30ea}\u{30f3}\u{30b0}\u{30bb}\u{30f3}\u{30c1}\u{30bb}\u{30f3}\u{30c8}\u{30c0}\u{30fc}\u{30b9}\u{30c7}\u{30b7}\u{30c9}\u{30eb}\u{30ca}\u{30ce}\u{30ce}\u{30c3}\u{30c8}\u{30cf}\u{30a4}\u{30c4}\u{30d1}\u{30fc}\u{30bb}\u{30f3}\u{30c8}\u{30d1}\u{30fc}\u{30c4}\u{30d0}\u{30fc}\u{30ec}\u{30eb}\u{30d4}\u{30a2}\u{30b9}\u{30c8}\u{30eb}\u{30d4}\u{30af}\u{30eb}\u{30d4}\u{30b3}\u{30d3}\u{30eb}\u{30d5}\u{30a1}\u{30e9}\u{30c3}\u{30c9}\u{30d5}\u{30a3}\u{30fc}\u{30c8}\u{30d6}\u{30c3}\u{30b7}\u{30a7}\u{30eb}\u{30d5}\u{30e9}\u{30f3}\u{30d8}\u{30af}\u{30bf}\u{30fc}\u{30eb}\u{30da}\u{30bd}\u{30da}\u{30cb}\u{30d2}\u{30d8}\u{30eb}\u{30c4}\u{30da}\u{30f3}\u{30b9}\u{30da}\u{30fc}\u{30b8}\u{30d9}\u{30fc}\u{30bf}\u{30dd}\u{30a4}\u{30f3}\u{30c8}\u{30dc}\u{30eb}\u{30c8}\u{30db}\u{30f3}\u{30dd}\u{30f3}\u{30c9}\u{30db}\u{30fc}\u{30eb}\u{30db}\u{30fc}\u{30f3}\u{30de}\u{30a4}\u{30af}\u{30ed}\u{30de}\u{30a4}\u{30eb}\u{30de}\u{30c3}\u{30cf}\u{30de}\u{30eb}\u{30af}\u{30de}\u{30f3}\u{30b7}\u{30e7}\u{30f3}\u{30df}\u{30af}\u{30ed}\u{30f3}\u{30df}\u{30ea}\u{30df}\u{30ea}\u{30d0}\u{30fc}\u{30eb}\u{30e1}\u{30ac}\u{30e1}\u{30ac}\u{30c8}\u{30f3}\u{30e4}\u{30fc}\u{30c9}\u{30e4}\u{30fc}\u{30eb}\u{30e6}\u{30a2}\u{30f3}\u{30ea}\u{30c3}\u{30c8}\u{30eb}\u{30ea}\u{30e9}\u{30eb}\u{30d4}\u{30fc}\u{30eb}\u{30fc}\u{30d6}\u{30eb}\u{30ec}\u{30e0}\u{30ec}\u{30f3}\u{30c8}\u{30b2}\u{30f3}0\u{70b9}1\u{70b9}2\u{70b9}3\u{70b9}4\u{70b9}5\u{70b9}6\u{70b9}7\u{70b9}8\u{70b9}9\u{70b9}10\u{70b9}11\u{70b9}12\u{70b9}13\u{70b9}14\u{70b9}15\u{70b9}16\u{70b9}17\u{70b9}18\u{70b9}19\u{70b9}20\u{70b9}21\u{70b9}22\u{70b9}23\u{70b9}24\u{70b9}hpadaaubarovpcdmdm2dm3iu\u{5e73}\u{6210}\u{662d}\u{548c}\u{5927}\u{6b63}\u{660e}\u{6cbb}\u{682a}\u{5f0f}\u{4f1a}\u{793e}na\u{3bc}amakakbmbgbcalkcalpfnf\u{3bc}f\u{3bc}gmgkghzkhzmhzthz\u{3bc}lmldlfmnm\u{3bc}mmmcmkmmm2cm2km2mm3cm3km3m\u{2215}sm\u{2215}s2kpampagparadrad\u{2215}srad\u{2215}s2psns\u{3bc}smspvnv\u{3bc}vmvkvpwnw\u{3bc}wmwkwk\u{3c9}m\u{3c9}bqc\u{2215}kgdbgyhainkkktlnloglxmilmolphppmprsvwbv\u{2215}ma\u{2215}m1\u{65e5}2\u{65e5}3\u{65e5}4\u{65e5}5\u{65e5}6\u{65e5}7\u{65e5}8\u{65e5}9\u{65e5}10\u{65e5}11\u{65e5}12\u{65e5}13\u{65e5}14\u{65e5}15\u{65e5}16\u{65e5}17\u{65e5}18\u{65e5}19\u{65e5}20\u{65e5}21\u{65e5}22\u{65e5}23\u{65e5}24\u{65e5}25\u{65e5}26\u{65e5}27\u{65e5}28\u{65e5}29\u{65e5}30\u{65e5}31\u{65e5}gal\u{a641}\u{a643}\u{a645}\u{a647}\u{a649}\u{a64d}\u{a64f}\u{a651}\u{a653}\u{a655}\u{a657}\u{a659}\u{a65b}\u{a65d}\u{a65f}\u{a661}\u{a663}\u{a665}\u{a667}\u{a669}\u{a66b}\u{a66d}\u{a681}\u{a683}\u{a685}\u{a687}\u{a689}\u{a68b}\u{a68d}\u{a68f}\u{a691}\u{a693}\u{a695}\u{a697}\u{a699}\u{a69b}\u{a723}\u{a725}\u{a727}\u{a729}\u{a72b}\u{a72d}\u{a72f}\u{a733}\u{a735}\u{a737}\u{a739}\u{a73b}\u{a73d}\u{a73f}\u{a741}\u{a743}\u{a745}\u{a747}\u{a749}\u{a74b}\u{a74d}\u{a74f}\u{a751}\u{a753}\u{a755}\u{a757}\u{a759}\u{a75b}\u{a75d}\u{a75f}\u{a761}\u{a763}\u{a765}\u{a767}\u{a769}\u{a76b}\u{a76d}\u{a76f}\u{a77a}\u{a77c}\u{1d79}\u{a77f}\u{a781}\u{a783}\u{a785}\u{a787}\u{a78c}\u{a791}\u{a793}\u{a797}\u{a799}\u{a79b}\u{a79d}\u{a79f}\u{a7a1}\u{a7a3}\u{a7a5}\u{a7a7}\u{a7a9}\u{26c}\u{29e}\u{287}\u{ab53}\u{a7b5}\u{a7b7}\u{a7b9}\u{a7bb}\u{a7bd}\u{a7bf}\u{a7c1}\u{a7c3}\u{a794}\u{1d8e}\u{a7c8}\u{a7ca}\u{264}\u{a7cd}\u{a7cf}\u{a7d1}\u{a7d3}\u{a7d5}\u{a7d7}\u{a7d9}\u{a7db}\u{19b}\u{a7f6}\u{ab37}\u{ab52}\u{28d}\u{13a0}\u{13a1}\u{13a2}\u{13a3}\u{13a4}\u{13a5}\u{13a6}\u{13a7}\u{13a8}\u{13a9}\u{13aa}\u{13ab}\u{13ac}\u{13ad}\u{13ae}\u{13af}\u{13b0}\u{13b1}\u{13b2}\u{13b3}\u{13b4}\u{13b5}\u{13b6}\u{13b7}\u{13b8}\u{13b9}\u{13ba}\u{13bb}\u{13bc}\u{13bd}\u{13be}\u{13bf}\u{13c0}\u{13c1}\u{13c2}\u{13c3}\u{13c4}\u{13c5}\u{13c6}\u{13c7}\u{13c8}\u{13c9}\u{13ca}\u{13cb}\u{13cc}\u{13cd}\u{13ce}\u{13cf}\u{13d0}\u{13d1}\u{13d2}\u{13d3}\u{13d4}\u{13d5}\u{13d6}\u{13d7}\u{13d8}\u{13d9}\u{13da}\u{13db}\u{13dc}\u{13dd}\u{13de}\u{13df}\u{13e0}\u{13e1}\u{13e2}\u{13e3}\u{13e4}\u{13e5}\u{13e6}\u{13e7}\u{13e8}\u{13e9}\u{13ea}\u{13eb}\u{13ec}\u{13ed}\u{13ee}\u{13ef}\u{8c48}\u{66f4}\u{8cc8}\u{6ed1}\u{4e32}\u{53e5}\u{5951}\u{5587}\u{5948}\u{61f6}\u{7669}\u{7f85}\u{863f}\u{87ba}\u{88f8}\u{908f}\u{6a02}\u{6d1b}\u{70d9}\u{73de}\u{843d}\u{916a}\u{99f1}\u{4e82}\u{5375}\u{6b04}\u{721b}\u{862d}\u{9e1e}\u{5d50}\u{6feb}\u{85cd}\u{8964}\u{62c9}\u{81d8}\u{881f}\u{5eca}\u{6717}\u{6d6a}\u{72fc}\u{90ce}\u{4f86}\u{51b7}\u{52de}\u{64c4}\u{6ad3}\u{7210}\u{76e7}\u{8606}\u{865c}\u{8def}\u{9732}\u{9b6f}\u{9dfa}\u{788c}\u{797f}\u{7da0}\u{83c9}\u{9304}\u{8ad6}\u{58df}\u{5f04}\u{7c60}\u{807e}\u{7262}\u{78ca}\u{8cc2}\u{96f7}\u{58d8}\u{5c62}\u{6a13}\u{6dda}\u{6f0f}\u{7d2f}\u{7e37}\u{964b}\u{52d2}\u{808b}\u{51dc}\u{51cc}\u{7a1c}\u{7dbe}\u{83f1}\u{9675}\u{8b80}\u{62cf}\u{8afe}\u{4e39}\u{5be7}\u{6012}\u{7387}\u{7570}\u{5317}\u{78fb}\u{4fbf}\u{5fa9}\u{4e0d}\u{6ccc}\u{6578}\u{7d22}\u{53c3}\u{585e}\u{7701}\u{8449}\u{8aaa}\u{6bba}\u{6c88}\u{62fe}\u{82e5}\u{63a0}\u{7565}\u{4eae}\u{5169}\u{51c9}\u{6881}\u{7ce7}\u{826f}\u{8ad2}\u{91cf}\u{52f5}\u{5442}\u{5eec}\u{65c5}\u{6ffe}\u{792a}\u{95ad}\u{9a6a}\u{9e97}\u{9ece}\u{66c6}\u{6b77}\u{8f62}\u{5e74}\u{6190}\u{6200}\u{649a}\u{6f23}\u{7149}\u{7489}\u{79ca}\u{7df4}\u{806f}\u{8f26}\u{84ee}\u{9023}\u{934a}\u{5217}\u{52a3}\u{54bd}\u{70c8}\u{88c2}\u{5ec9}\u{5ff5}\u{637b}\u{6bae}\u{7c3e}\u{7375}\u{56f9}\u{5dba}\u{601c}\u{73b2}\u{7469}\u{7f9a}\u{8046}\u{9234}\u{96f6}\u{9748}\u{9818}\u{4f8b}\u{79ae}\u{91b4}\u{96b8}\u{60e1}\u{4e86}\u{50da}\u{5bee}\u{5c3f}\u{6599}\u{71ce}\u{7642}\u{84fc}\u{907c}\u{6688}\u{962e}\u{5289}\u{677b}\u{67f3}\u{6d41}\u{6e9c}\u{7409}\u{7559}\u{786b}\u{7d10}\u{985e}\u{622e}\u{9678}\u{502b}\u{5d19}\u{6dea}\u{8f2a}\u{5f8b}\u{6144}\u{6817}\u{9686}\u{5229}\u{540f}\u{5c65}\u{6613}\u{674e}\u{68a8}\u{6ce5}\u{7406}\u{75e2}\u{7f79}\u{88cf}\u{88e1}\u{96e2}\u{533f}\u{6eba}\u{541d}\u{71d0}\u{7498}\u{85fa}\u{96a3}\u{9c57}\u{9e9f}\u{6797}\u{6dcb}\u{81e8}\u{7b20}\u{7c92}\u{72c0}\u{7099}\u{8b58}\u{4ec0}\u{8336}\u{523a}\u{5207}\u{5ea6}\u{62d3}\u{7cd6}\u{5b85}\u{6d1e}\u{66b4}\u{8f3b}\u{964d}\u{5ed3}\u{5140}\u{55c0}\u{585a}\u{6674}\u{51de}\u{732a}\u{76ca}\u{793c}\u{795e}\u{7965}\u{798f}\u{9756}\u{7cbe}\u{8612}\u{8af8}\u{9038}\u{90fd}\u{98ef}\u{98fc}\u{9928}\u{9db4}\u{90de}\u{96b7}\u{4fae}\u{50e7}\u{514d}\u{52c9}\u{52e4}\u{5351}\u{559d}\u{5606}\u{5668}\u{5840}\u{58a8}\u{5c64}\u{6094}\u{6168}\u{618e}\u{61f2}\u{654f}\u{65e2}\u{6691}\u{6885}\u{6d77}\u{6e1a}\u{6f22}\u{716e}\u{722b}\u{7422}\u{7891}\u{7949}\u{7948}\u{7950}\u{7956}\u{798d}\u{798e}\u{7a40}\u{7a81}\u{7bc0}\u{7e09}\u{7e41}\u{7f72}\u{8005}\u{81ed}\u{8279}\u{8457}\u{8910}\u{8996}\u{8b01}\u{8b39}\u{8cd3}\u{8d08}\u{8fb6}\u{96e3}\u{97ff}\u{983b}\u{6075}\u{242ee}\u{8218}\u{4e26}\u{51b5}\u{5168}\u{4f80}\u{5145}\u{5180}\u{52c7}\u{52fa}\u{5555}\u{5599}\u{55e2}\u{58b3}\u{5944}\u{5954}\u{5a62}\u{5b28}\u{5ed2}\u{5ed9}\u{5f69}\u{5fad}\u{60d8}\u{614e}\u{6108}\u{6160}\u{6234}\u{63c4}\u{641c}\u{6452}\u{6556}\u{671b}\u{6756}\u{6edb}\u{6ecb}\u{701e}\u{77a7}\u{7235}\u{72af}\u{7471}\u{7506}\u{753b}\u{761d}\u{761f}\u{76db}\u{76f4}\u{774a}\u{7740}\u{78cc}\u{7ab1}\u{7c7b}\u{7d5b}\u{7f3e}\u{8352}\u{83ef}\u{8779}\u{8941}\u{8986}\u{8abf}\u{8acb}\u{8aed}\u{8b8a}\u{8f38}\u{9072}\u{9199}\u{9276}\u{967c}\u{97db}\u{980b}\u{9b12}\u{2284a}\u{22844}\u{233d5}\u{3b9d}\u{4018}\u{4039}\u{25249}\u{25cd0}\u{27ed3}\u{9f43}\u{9f8e}fffiflffl\u{574}\u{576}\u{574}\u{565}\u{574}\u{56b}\u{57e}\u{576}\u{574}\u{56d}\u{5d9}\u{5b4}\u{5f2}\u{5b7}\u{5e2}\u{5d4}\u{5db}\u{5dc}\u{5dd}\u{5e8}\u{5ea}\u{5e9}\u{5c1}\u{5e9}\u{5c2}\u{5e9}\u{5bc}\u{5c1}\u{5e9}\u{5bc}\u{5c2}\u{5d0}\u{5b7}\u{5d0}\u{5b8}\u{5d0}\u{5bc}\u{5d1}\u{5bc}\u{5d2}\u{5bc}\u{5d3}\u{5bc}\u{5d4}\u{5bc}\u{5d5}\u{5bc}\u{5d6}\u{5bc}\u{5d8}\u{5bc}\u{5d9}\u{5bc}\u{5da}\u{5bc}\u{5db}\u{5bc}\u{5dc}\u{5bc}\u{5de}\u{5bc}\u{5e0}\u{5bc}\u{5e1}\u{5bc}\u{5e3}\u{5bc}\u{5e4}\u{5bc}\u{5e6}\u{5bc}\u{5e7}\u{5bc}\u{5e8}\u{5bc}\u{5ea}\u{5bc}\u{5d5}\u{5b9}\u{5d1}\u{5bf}\u{5db}\u{5bf}\u{5e4}\u{5bf}\u{5d0}\u{5dc}\u{671}\u{67b}\u{67e}\u{680}\u{67a}\u{67f}\u{679}\u{6a4}\u{6a6}\u{684}\u{683}\u{686}\u{687}\u{68d}\u{68c}\u{68e}\u{688}\u{698}\u{691}\u{6a9}\u{6af}\u{6b3}\u{6b1}\u{6ba}\u{6bb}\u{6c0}\u{6c1}\u{6be}\u{6d2}\u{6d3}\u{6ad}\u{6c6}\u{6c8}\u{6cb}\u{6c5}\u{6c9}\u{6d0}\u{649}\u{626}\u{627}\u{626}\u{6d5}\u{626}\u{648}\u{626}\u{6c7}\u{626}\u{6c6}\u{626}\u{6c8}\u{626}\u{6d0}\u{626}\u{649}\u{6cc}\u{626}\u{62c}\u{626}\u{62d}\u{626}\u{645}\u{626}\u{64a}\u{628}\u{62c}\u{628}\u{62d}\u{628}\u{62e}\u{628}\u{645}\u{628}\u{649}\u{628}\u{64a}\u{62a}\u{62c}\u{62a}\u{62d}\u{62a}\u{62e}\u{62a}\u{645}\u{62a}\u{649}\u{62a}\u{64a}\u{62b}\u{62c}\u{62b}\u{645}\u{62b}\u{649}\u{62b}\u{64a}\u{62c}\u{62d}\u{62c}\u{645}\u{62d}\u{645}\u{62e}\u{62c}\u{62e}\u{62d}\u{62e}\u{645}\u{633}\u{62c}\u{633}\u{62d}\u{633}\u{62e}\u{633}\u{645}\u{635}\u{62d}\u{635}\u{645}\u{636}\u{62c}\u{636}\u{62d}\u{636}\u{62e}\u{636}\u{645}\u{637}\u{62d}\u{637}\u{645}\u{638}\u{645}\u{639}\u{62c}\u{639}\u{645}\u{63a}\u{62c}\u{63a}\u{645}\u{641}\u{62c}\u{641}\u{62d}\u{641}\u{62e}\u{641}\u{645}\u{641}\u{649}\u{641}\u{64a}\u{642}\u{62d}\u{642}\u{645}\u{642}\u{649}\u{642}\u{64a}\u{643}\u{627}\u{643}\u{62c}\u{643}\u{62d}\u{643}\u{62e}\u{643}\u{644}\u{643}\u{645}\u{643}\u{649}\u{643}\u{64a}\u{644}\u{62c}\u{644}\u{62d}\u{644}\u{62e}\u{644}\u{645}\u{644}\u{649}\u{644}\u{64a}\u{645}\u{62c}\u{645}\u{645}\u{645}\u{649}\u{645}\u{64a}\u{646}\u{62c}\u{646}\u{62d}\u{646}\u{62e}\u{646}\u{645}\u{646}\u{649}\u{646}\u{64a}\u{647}\u{62c}\u{647}\u{645}\u{647}\u{649}\u{647}\u{64a}\u{64a}\u{62d}\u{64a}\u{62e}\u{64a}\u{649}\u{630}\u{670}\u{631}\u{670}\u{649}\u{670} \u{64c}\u{651} \u{64d}\u{651} \u{64e}\u{651} \u{64f}\u{651} \u{650}\u{651} \u{651}\u{670}\u{626}\u{631}\u{626}\u{632}\u{626}\u{646}\u{628}\u{631}\u{628}\u{632}\u{628}\u{646}\u{62a}\u{631}\u{62a}\u{632}\u{62a}\u{646}\u{62b}\u{631}\u{62b}\u{632}\u{62b}\u{646}\u{645}\u{627}\u{646}\u{631}\u{646}\u{632}\u{646}\u{646}\u{64a}\u{631}\u{64a}\u{632}\u{626}\u{62e}\u{626}\u{647}\u{628}\u{647}\u{62a}\u{647}\u{635}\u{62e}\u{644}\u{647}\u{646}\u{647}\u{647}\u{670}\u{62b}\u{647}\u{633}\u{647}\u{634}\u{645}\u{634}\u{647}\u{640}\u{64e}\u{651}\u{640}\u{64f}\u{651}\u{640}\u{650}\u{651}\u{637}\u{649}\u{637}\u{64a}\u{639}\u{649}\u{639}\u{64a}\u{63a}\u{649}\u{63a}\u{64a}\u{633}\u{649}\u{633}\u{64a}\u{634}\u{649}\u{634}\u{64a}\u{62d}\u{649}\u{62c}\u{649}\u{62c}\u{64a}\u{62e}\u{649}\u{635}\u{649}\u{635}\u{64a}\u{636}\u{649}\u{636}\u{64a}\u{634}\u{62c}\u{634}\u{62d}\u{634}\u{62e}\u{634}\u{631}\u{633}\u{631}\u{635}\u{631}\u{636}\u{631}\u{627}\u{64b}\u{62a}\u{62c}\u{645}\u{62a}\u{62d}\u{62c}\u{62a}\u{62d}\u{645}\u{62a}\u{62e}\u{645}\u{62a}\u{645}\u{62c}\u{62a}\u{645}\u{62d}\u{62a}\u{645}\u{62e}\u{62d}\u{645}\u{64a}\u{62d}\u{645}\u{649}\u{633}\u{62d}\u{62c}\u{633}\u{62c}\u{62d}\u{633}\u{62c}\u{649}\u{633}\u{645}\u{62d}\u{633}\u{645}\u{62c}\u{633}\u{645}\u{645}\u{635}\u{62d}\u{62d}\u{635}\u{645}\u{645}\u{634}\u{62d}\u{645}\u{634}\u{62c}\u{64a}\u{634}\u{645}\u{62e}\u{634}\u{645}\u{645}\u{636}\u{62d}\u{649}\u{636}\u{62e}\u{645}\u{637}\u{645}\u{62d}\u{637}\u{645}\u{645}\u{637}\u{645}\u{64a}\u{639}\u{62c}\u{645}\u{639}\u{645}\u{645}\u{639}\u{645}\u{649}\u{63a}\u{645}\u{645}\u{63a}\u{645}\u{64a}\u{63a}\u{645}\u{649}\u{641}\u{62e}\u{645}\u{642}\u{645}\u{62d}\u{642}\u{645}\u{645}\u{644}\u{62d}\u{645}\u{644}\u{62d}\u{64a}\u{644}\u{62d}\u{649}\u{644}\u{62c}\u{62c}\u{644}\u{62e}\u{645}\u{644}\u{645}\u{62d}\u{645}\u{62d}\u{62c}\u{645}\u{62d}\u{64a}\u{645}\u{62c}\u{62d}\u{645}\u{62e}\u{645}\u{645}\u{62c}\u{62e}\u{647}\u{645}\u{62c}\u{647}\u{645}\u{645}\u{646}\u{62d}\u{645}\u{646}\u{62d}\u{649}\u{646}\u{62c}\u{645}\u{646}\u{62c}\u{649}\u{646}\u{645}\u{64a}\u{646}\u{645}\u{649}\u{64a}\u{645}\u{645}\u{628}\u{62e}\u{64a}\u{62a}\u{62c}\u{64a}\u{62a}\u{62c}\u{649}\u{62a}\u{62e}\u{64a}\u{62a}\u{62e}\u{649}\u{62a}\u{645}\u{64a}\u{62a}\u{645}\u{649}\u{62c}\u{645}\u{64a}\u{62c}\u{62d}\u{649}\u{62c}\u{645}\u{649}\u{633}\u{62e}\u{649}\u{635}\u{62d}\u{64a}\u{634}\u{62d}\u{64a}\u{636}\u{62d}\u{64a}\u{644}\u{62c}\u{64a}\u{644}\u{645}\u{64a}\u{64a}\u{62c}\u{64a}\u{64a}\u{645}\u{64a}\u{645}\u{645}\u{64a}\u{642}\u{645}\u{64a}\u{646}\u{62d}\u{64a}\u{639}\u{645}\u{64a}\u{643}\u{645}\u{64a}\u{646}\u{62c}\u{62d}\u{645}\u{62e}\u{64a}\u{644}\u{62c}\u{645}\u{643}\u{645}\u{645}\u{62c}\u{62d}\u{64a}\u{62d}\u{62c}\u{64a}\u{645}\u{62c}\u{64a}\u{641}\u{645}\u{64a}\u{628}\u{62d}\u{64a}\u{633}\u{62e}\u{64a}\u{646}\u{62c}\u{64a}\u{635}\u{644}\u{6d2}\u{642}\u{644}\u{6d2}\u{627}\u{644}\u{644}\u{647}\u{627}\u{643}\u{628}\u{631}\u{645}\u{62d}\u{645}\u{62f}\u{635}\u{644}\u{639}\u{645}\u{631}\u{633}\u{648}\u{644}\u{639}\u{644}\u{64a}\u{647}\u{648}\u{633}\u{644}\u{645}\u{635}\u{644}\u{649}\u{635}\u{644}\u{649} \u{627}\u{644}\u{644}\u{647} \u{639}\u{644}\u{64a}\u{647} \u{648}\u{633}\u{644}\u{645}\u{62c}\u{644} \u{62c}\u{644}\u{627}\u{644}\u{647}\u{631}\u{6cc}\u{627}\u{644},\u{3001}\u{3016}\u{3017}\u{2014}\u{2013}_{}\u{3014}\u{3015}\u{3010}\u{3011}\u{300a}\u{300b}\u{300c}\u{300d}\u{300e}\u{300f}[]#&*-<>\\$%@ \u{64b}\u{640}\u{64b}\u{640}\u{651} \u{652}\u{640}\u{652}\u{621}\u{622}\u{623}\u{624}\u{625}\u{629}\u{644}\u{622}\u{644}\u{623}\u{644}\u{625}\"'^|~\u{2985}\u{2986}\u{30fb}\u{30a5}\u{30e3}\u{a2}\u{a3}\u{ac}\u{a6}\u{a5}\u{20a9}\u{2502}\u{2190}\u{2191}\u{2192}\u{2193}\u{25a0}\u{25cb}\u{10428}\u{10429}\u{1042a}\u{1042b}\u{1042c}\u{1042d}\u{1042e}\u{1042f}\u{10430}\u{10431}\u{10432}\u{10433}\u{10434}\u{10435}\u{10436}\u{10437}\u{10438}\u{10439}\u{1043a}\u{1043b}\u{1043c}\u{1043d}\u{1043e}\u{1043f}\u{10440}\u{10441}\u{10442}\u{10443}\u{10444}\u{10445}\u{10446}\u{10447}\u{10448}\u{10449}\u{1044a}\u{1044b}\u{1044c}\u{1044d}\u{1044e}\u{1044f}\u{104d8}\u{104d9}\u{104da}\u{104db}\u{104dc}\u{104dd}\u{104de}\u{104df}\u{104e0}\u{104e1}\u{104e2}\u{104e3}\u{104e4}\u{104e5}\u{104e6}\u{104e7}\u{104e8}\u{104e9}\u{104ea}\u{104eb}\u{104ec}\u{104ed}\u{104ee}\u{104ef}\u{104f0}\u{104f1}\u{104f2}\u{104f3}\u{104f4}\u{104f5}\u{104f6}\u{104f7}\u{104f8}\u{104f9}\u{104fa}\u{104fb}\u{10597}\u{10598}\u{10599}\u{1059a}\u{1059b}\u{1059c}\u{1059d}\u{1059e}\u{1059f}\u{105a0}\u{105a1}\u{105a3}\u{105a4}\u{105a5}\u{105a6}\u{105a7}\u{105a8}\u{105a9}\u{105aa}\u{105ab}\u{105ac}\u{105ad}\u{105ae}\u{105af}\u{105b0}\u{105b1}\u{105b3}\u{105b4}\u{105b5}\u{105b6}\u{105b7}\u{105b8}\u{105b9}\u{105bb}\u{105bc}\u{2d0}\u{2d1}\u{299}\u{2a3}\u{ab66}\u{2a5}\u{2a4}\u{1d91}\u{258}\u{25e}\u{2a9}\u{262}\u{29b}\u{29c}\u{267}\u{284}\u{2aa}\u{2ab}\u{1df04}\u{a78e}\u{26e}\u{1df05}\u{28e}\u{1df06}\u{276}\u{277}\u{27a}\u{1df08}\u{27e}\u{2a8}\u{2a6}\u{ab67}\u{2a7}\u{2c71}\u{28f}\u{2a1}\u{2a2}\u{298}\u{1c0}\u{1c1}\u{1c2}\u{1df0a}\u{1df1e}\u{10cc0}\u{10cc1}\u{10cc2}\u{10cc3}\u{10cc4}\u{10cc5}\u{10cc6}\u{10cc7}\u{10cc8}\u{10cc9}\u{10cca}\u{10ccb}\u{10ccc}\u{10ccd}\u{10cce}\u{10ccf}\u{10cd0}\u{10cd1}\u{10cd2}\u{10cd3}\u{10cd4}\u{10cd5}\u{10cd6}\u{10cd7}\u{10cd8}\u{10cd9}\u{10cda}\u{10cdb}\u{10cdc}\u{10cdd}\u{10cde}\u{10cdf}\u{10ce0}\u{10ce1}\u{10ce2}\u{10ce3}\u{10ce4}\u{10ce5}\u{10ce6}\u{10ce7}\u{10ce8}\u{10ce9}\u{10cea}\u{10ceb}\u{10cec}\u{10ced}\u{10cee}\u{10cef}\u{10cf0}\u{10cf1}\u{10cf2}\u{10d70}\u{10d71}\u{10d72}\u{10d73}\u{10d74}\u{10d75}\u{10d76}\u{10d77}\u{10d78}\u{10d79}\u{10d7a}\u{10d7b}\u{10d7c}\u{10d7d}\u{10d7e}\u{10d7f}\u{10d80}\u{10d81}\u{10d82}\u{10d83}\u{10d84}\u{10d85}\u{118c0}\u{118c1}\u{118c2}\u{118c3}\u{118c4}\u{118c5}\u{118c6}\u{118c7}\u{118c8}\u{118c9}\u{118ca}\u{118cb}\u{118cc}\u{118cd}\u{118ce}\u{118cf}\u{118d0}\u{118d1}\u{118d2}\u{118d3}\u{118d4}\u{118d5}\u{118d6}\u{118d7}\u{118d8}\u{118d9}\u{118da}\u{118db}\u{118dc}\u{118dd}\u{118de}\u{118df}\u{16e60}\u{16e61}\u{16e62}\u{16e63}\u{16e64}\u{16e65}\u{16e66}\u{16e67}\u{16e68}\u{16e69}\u{16e6a}\u{16e6b}\u{16e6c}\u{16e6d}\u{16e6e}\u{16e6f}\u{16e70}\u{16e71}\u{16e72}\u{16e73}\u{16e74}\u{16e75}\u{16e76}\u{16e77}\u{16e78}\u{16e79}\u{16e7a}\u{16e7b}\u{16e7c}\u{16e7d}\u{16e7e}\u{16e7f}\u{16ebb}\u{16ebc}\u{16ebd}\u{16ebe}\u{16ebf}\u{16ec0}\u{16ec1}\u{16ec2}\u{16ec3}\u{16ec4}\u{16ec5}\u{16ec6}\u{16ec7}\u{16ec8}\u{16ec9}\u{16eca}\u{16ecb}\u{16ecc}\u{16ecd}\u{16ece}\u{16ecf}\u{16ed0}\u{16ed1}\u{16ed2}\u{16ed3}\u{1d157}\u{1d165}\u{1d158}\u{1d165}\u{1d158}\u{1d165}\u{1d16e}\u{1d158}\u{1d165}\u{1d16f}\u{1d158}\u{1d165}\u{1d170}\u{1d158}\u{1d165}\u{1d171}\u{1d158}\u{1d165}\u{1d172}\u{1d1b9}\u{1d165}\u{1d1ba}\u{1d165}\u{1d1b9}\u{1d165}\u{1d16e}\u{1d1ba}\u{1d165}\u{1d16e}\u{1d1b9}\u{1d165}\u{1d16f}\u{1d1ba}\u{1d165}\u{1d16f}\u{131}\u{237}\u{2207}\u{2202}\u{1e922}\u{1e923}\u{1e924}\u{1e925}\u{1e926}\u{1e927}\u{1e928}\u{1e929}\u{1e92a}\u{1e92b}\u{1e92c}\u{1e92d}\u{1e92e}\u{1e92f}\u{1e930}\u{1e931}\u{1e932}\u{1e933}\u{1e934}\u{1e935}\u{1e936}\u{1e937}\u{1e938}\u{1e939}\u{1e93a}\u{1e93b}\u{1e93c}\u{1e93d}\u{1e93e}\u{1e93f}\u{1e940}\u{1e941}\u{1e942}\u{1e943}\u{66e}\u{6a1}\u{66f}0,1,2,3,4,5,6,7,8,9,\u{3014}s\u{3015}wzhvsdppvwcmrdj\u{307b}\u{304b}\u{30b3}\u{30b3}\u{5b57}\u{53cc}\u{591a}\u{89e3}\u{4ea4}\u{6620}\u{7121}\u{524d}\u{5f8c}\u{518d}\u{65b0}\u{521d}\u{7d42}\u{8ca9}\u{58f0}\u{5439}\u{6f14}\u{6295}\u{6355}\u{904a}\u{6307}\u{6253}\u{7981}\u{7a7a}\u{5408}\u{6e80}\u{7533}\u{5272}\u{55b6}\u{914d}\u{3014}\u{672c}\u{3015}\u{3014}\u{4e09}\u{3015}\u{3014}\u{4e8c}\u{3015}\u{3014}\u{5b89}\u{3015}\u{3014}\u{70b9}\u{3015}\u{3014}\u{6253}\u{3015}\u{3014}\u{76d7}\u{3015}\u{3014}\u{52dd}\u{3015}\u{3014}\u{6557}\u{3015}\u{5f97}\u{53ef}\u{4e3d}\u{4e38}\u{4e41}\u{20122}\u{4f60}\u{4fbb}\u{5002}\u{507a}\u{5099}\u{50cf}\u{349e}\u{2063a}\u{5154}\u{5164}\u{5177}\u{2051c}\u{34b9}\u{5167}\u{2054b}\u{5197}\u{51a4}\u{4ecc}\u{51ac}\u{291df}\u{5203}\u{34df}\u{523b}\u{5246}\u{5277}\u{3515}\u{5305}\u{5306}\u{5349}\u{535a}\u{5373}\u{537d}\u{537f}\u{20a2c}\u{7070}\u{53ca}\u{53df}\u{20b63}\u{53eb}\u{53f1}\u{5406}\u{549e}\u{5438}\u{5448}\u{5468}\u{54a2}\u{54f6}\u{5510}\u{5553}\u{5563}\u{5584}\u{55ab}\u{55b3}\u{55c2}\u{5716}\u{5717}\u{5651}\u{5674}\u{58ee}\u{57ce}\u{57f4}\u{580d}\u{578b}\u{5832}\u{5831}\u{58ac}\u{214e4}\u{58f2}\u{58f7}\u{5906}\u{5922}\u{5962}\u{216a8}\u{216ea}\u{59ec}\u{5a1b}\u{5a27}\u{59d8}\u{5a66}\u{36ee}\u{36fc}\u{5b08}\u{5b3e}\u{219c8}\u{5bc3}\u{5bd8}\u{5bf3}\u{21b18}\u{5bff}\u{5c06}\u{5f53}\u{3781}\u{5c60}\u{5cc0}\u{5c8d}\u{21de4}\u{5d43}\u{21de6}\u{5d6e}\u{5d6b}\u{5d7c}\u{5de1}\u{5de2}\u{382f}\u{5dfd}\u{5e28}\u{5e3d}\u{5e69}\u{3862}\u{22183}\u{387c}\u{5eb0}\u{5eb3}\u{5eb6}\u{2a392}\u{22331}\u{8201}\u{5f22}\u{38c7}\u{232b8}\u{261da}\u{5f62}\u{5f6b}\u{38e3}\u{5f9a}\u{5fcd}\u{5fd7}\u{5ff9}\u{6081}\u{393a}\u{391c}\u{226d4}\u{60c7}\u{6148}\u{614c}\u{617a}\u{61b2}\u{61a4}\u{61af}\u{61de}\u{621b}\u{625d}\u{62b1}\u{62d4}\u{6350}\u{22b0c}\u{633d}\u{62fc}\u{6368}\u{6383}\u{63e4}\u{22bf1}\u{6422}\u{63c5}\u{63a9}\u{3a2e}\u{6469}\u{647e}\u{649d}\u{6477}\u{3a6c}\u{656c}\u{2300a}\u{65e3}\u{66f8}\u{6649}\u{3b19}\u{3b08}\u{3ae4}\u{5192}\u{5195}\u{6700}\u{669c}\u{80ad}\u{43d9}\u{6721}\u{675e}\u{6753}\u{233c3}\u{3b49}\u{67fa}\u{6785}\u{6852}\u{2346d}\u{688e}\u{681f}\u{6914}\u{6942}\u{69a3}\u{69ea}\u{6aa8}\u{236a3}\u{6adb}\u{3c18}\u{6b21}\u{238a7}\u{6b54}\u{3c4e}\u{6b72}\u{6b9f}\u{6bbb}\u{23a8d}\u{21d0b}\u{23afa}\u{6c4e}\u{23cbc}\u{6cbf}\u{6ccd}\u{6c67}\u{6d16}\u{6d3e}\u{6d69}\u{6d78}\u{6d85}\u{23d1e}\u{6d34}\u{6e2f}\u{6e6e}\u{3d33}\u{6ec7}\u{23ed1}\u{6df9}\u{6f6e}\u{23f5e}\u{23f8e}\u{6fc6}\u{7039}\u{701b}\u{3d96}\u{704a}\u{707d}\u{7077}\u{70ad}\u{20525}\u{7145}\u{24263}\u{719c}\u{243ab}\u{7228}\u{7250}\u{24608}\u{7280}\u{7295}\u{24735}\u{24814}\u{737a}\u{738b}\u{3eac}\u{73a5}\u{3eb8}\u{7447}\u{745c}\u{7485}\u{74ca}\u{3f1b}\u{7524}\u{24c36}\u{753e}\u{24c92}\u{2219f}\u{7610}\u{24fa1}\u{24fb8}\u{25044}\u{3ffc}\u{4008}\u{250f3}\u{250f2}\u{25119}\u{25133}\u{771e}\u{771f}\u{778b}\u{4046}\u{4096}\u{2541d}\u{784e}\u{40e3}\u{25626}\u{2569a}\u{256c5}\u{79eb}\u{412f}\u{7a4a}\u{7a4f}\u{2597c}\u{25aa7}\u{7aee}\u{4202}\u{25bab}\u{7bc6}\u{7bc9}\u{4227}\u{25c80}\u{7cd2}\u{42a0}\u{7ce8}\u{7ce3}\u{7d00}\u{25f86}\u{7d63}\u{4301}\u{7dc7}\u{7e02}\u{7e45}\u{4334}\u{26228}\u{26247}\u{4359}\u{262d9}\u{7f7a}\u{2633e}\u{7f95}\u{7ffa}\u{264da}\u{26523}\u{8060}\u{265a8}\u{8070}\u{2335f}\u{43d5}\u{80b2}\u{8103}\u{440b}\u{813e}\u{5ab5}\u{267a7}\u{267b5}\u{23393}\u{2339c}\u{8204}\u{8f9e}\u{446b}\u{8291}\u{828b}\u{829d}\u{52b3}\u{82b1}\u{82b3}\u{82bd}\u{82e6}\u{26b3c}\u{831d}\u{8363}\u{83ad}\u{8323}\u{83bd}\u{83e7}\u{8353}\u{83ca}\u{83cc}\u{83dc}\u{26c36}\u{26d6b}\u{26cd5}\u{452b}\u{84f1}\u{84f3}\u{8516}\u{273ca}\u{8564}\u{26f2c}\u{455d}\u{4561}\u{26fb1}\u{270d2}\u{456b}\u{8650}\u{8667}\u{8669}\u{86a9}\u{8688}\u{870e}\u{86e2}\u{8728}\u{876b}\u{8786}\u{45d7}\u{87e1}\u{8801}\u{45f9}\u{8860}\u{27667}\u{88d7}\u{88de}\u{4635}\u{88fa}\u{34bb}\u{278ae}\u{27966}\u{46be}\u{46c7}\u{8aa0}\u{27ca8}\u{8cab}\u{8cc1}\u{8d1b}\u{8d77}\u{27f2f}\u{20804}\u{8dcb}\u{8dbc}\u{8df0}\u{208de}\u{8ed4}\u{285d2}\u{285ed}\u{9094}\u{90f1}\u{9111}\u{2872e}\u{911b}\u{9238}\u{92d7}\u{92d8}\u{927c}\u{93f9}\u{9415}\u{28bfa}\u{958b}\u{4995}\u{95b7}\u{28d77}\u{49e6}\u{96c3}\u{5db2}\u{9723}\u{29145}\u{2921a}\u{4a6e}\u{4a76}\u{97e0}\u{2940a}\u{4ab2}\u{29496}\u{9829}\u{295b6}\u{98e2}\u{4b33}\u{9929}\u{99a7}\u{99c2}\u{99fe}\u{4bce}\u{29b30}\u{9c40}\u{9cfd}\u{4cce}\u{4ced}\u{9d67}\u{2a0ce}\u{4cf8}\u{2a105}\u{2a20e}\u{2a291}\u{4d56}\u{9efe}\u{9f05}\u{9f0f}\u{9f16}\u{2a600}";
