//! Fixed inputs replayed ahead of the random cases.
//!
//! Published vectors (RFC 7748, RFC 8032, pycurve25519) and a few pattern
//! keys. Only the inputs live here; expected outputs still come from the
//! oracle like every other case.

use crate::error::{Error, Result};

pub struct ExchangeInput {
    pub label: &'static str,
    pub private_a: [u8; 32],
    pub private_b: [u8; 32],
}

pub struct SignatureInput {
    pub label: &'static str,
    pub seed: [u8; 32],
    pub message: Vec<u8>,
}

fn key(hex_str: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_str).map_err(|e| Error::Encoding(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| Error::Encoding(format!("{hex_str} is not 32 bytes")))
}

fn message(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|e| Error::Encoding(e.to_string()))
}

pub fn exchange_inputs() -> Result<Vec<ExchangeInput>> {
    Ok(vec![
        // RFC 7748 section 6.1
        ExchangeInput {
            label: "rfc7748",
            private_a: key("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")?,
            private_b: key("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb")?,
        },
        ExchangeInput {
            label: "pycurve25519",
            private_a: key("a8abababababababababababababababababababababababababababababab6b")?,
            private_b: key("c8cdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd4d")?,
        },
        // Clamping must turn these into valid scalars
        ExchangeInput {
            label: "zero_ones",
            private_a: [0u8; 32],
            private_b: [0x01u8; 32],
        },
        ExchangeInput {
            label: "ff_sequential",
            private_a: [0xffu8; 32],
            private_b: core::array::from_fn(|i| i as u8),
        },
    ])
}

pub fn signature_inputs() -> Result<Vec<SignatureInput>> {
    Ok(vec![
        // RFC 8032 section 7.1: tests 1-3, TEST 1024 and SHA(abc)
        SignatureInput {
            label: "rfc8032_test1",
            seed: key("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")?,
            message: Vec::new(),
        },
        SignatureInput {
            label: "rfc8032_test2",
            seed: key("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb")?,
            message: message("72")?,
        },
        SignatureInput {
            label: "rfc8032_test3",
            seed: key("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7")?,
            message: message("af82")?,
        },
        SignatureInput {
            label: "rfc8032_sha_abc",
            seed: key("833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42")?,
            message: message(concat!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a",
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ))?,
        },
        SignatureInput {
            label: "rfc8032_test1024",
            seed: key("f5e5767cf153319517630f226876b86c8160cc583bc013744c6bf255f5cc0ee5")?,
            message: message(concat!(
                "08b8b2b733424243760fe426a4b54908632110a66c2f6591eabd3345e3e4eb98",
                "fa6e264bf09efe12ee50f8f54e9f77b1e355f6c50544e23fb1433ddf73be84d8",
                "79de7c0046dc4996d9e773f4bc9efe5738829adb26c81b37c93a1b270b20329d",
                "658675fc6ea534e0810a4432826bf58c941efb65d57a338bbd2e26640f89ffbc",
                "1a858efcb8550ee3a5e1998bd177e93a7363c344fe6b199ee5d02e82d522c4fe",
                "ba15452f80288a821a579116ec6dad2b3b310da903401aa62100ab5d1a36553e",
                "06203b33890cc9b832f79ef80560ccb9a39ce767967ed628c6ad573cb116dbef",
                "efd75499da96bd68a8a97b928a8bbc103b6621fcde2beca1231d206be6cd9ec7",
                "aff6f6c94fcd7204ed3455c68c83f4a41da4af2b74ef5c53f1d8ac70bdcb7ed1",
                "85ce81bd84359d44254d95629e9855a94a7c1958d1f8ada5d0532ed8a5aa3fb2",
                "d17ba70eb6248e594e1a2297acbbb39d502f1a8c6eb6f1ce22b3de1a1f40cc24",
                "554119a831a9aad6079cad88425de6bde1a9187ebb6092cf67bf2b13fd65f270",
                "88d78b7e883c8759d2c4f5c65adb7553878ad575f9fad878e80a0c9ba63bcbcc",
                "2732e69485bbc9c90bfbd62481d9089beccf80cfe2df16a2cf65bd92dd597b07",
                "07e0917af48bbb75fed413d238f5555a7a569d80c3414a8d0859dc65a46128ba",
                "b27af87a71314f318c782b23ebfe808b82b0ce26401d2e22f04d83d1255dc51a",
                "ddd3b75a2b1ae0784504df543af8969be3ea7082ff7fc9888c144da2af58429e",
                "c96031dbcad3dad9af0dcbaaaf268cb8fcffead94f3c7ca495e056a9b47acdb7",
                "51fb73e666c6c655ade8297297d07ad1ba5e43f1bca32301651339e22904cc8c",
                "42f58c30c04aafdb038dda0847dd988dcda6f3bfd15c4b4c4525004aa06eeff8",
                "ca61783aacec57fb3d1f92b0fe2fd1a85f6724517b65e614ad6808d6f6ee34df",
                "f7310fdc82aebfd904b01e1dc54b2927094b2db68d6f903b68401adebf5a7e08",
                "d78ff4ef5d63653a65040cf9bfd4aca7984a74d37145986780fc0b16ac451649",
                "de6188a7dbdf191f64b5fc5e2ab47b57f7f7276cd419c17a3ca8e1b939ae49e4",
                "88acba6b965610b5480109c8b17b80e1b7b750dfc7598d5d5011fd2dcc5600a3",
                "2ef5b52a1ecc820e308aa342721aac0943bf6686b64b2579376504ccc493d97e",
                "6aed3fb0f9cd71a43dd497f01f17c0e2cb3797aa2a2f256656168e6c496afc5f",
                "b93246f6b1116398a346f1a641f3b041e989f7914f90cc2c7fff357876e506b5",
                "0d334ba77c225bc307ba537152f3f1610e4eafe595f6d9d90d11faa933a15ef1",
                "369546868a7f3a45a96768d40fd9d03412c091c6315cf4fde7cb68606937380d",
                "b2eaaa707b4c4185c32eddcdd306705e4dc1ffc872eeee475a64dfac86aba41c",
                "0618983f8741c5ef68d3a101e8a3b8cac60c905c15fc910840b94c00a0b9d0",
            ))?,
        },
        // Crosses the 64 KiB mark. The 1919810-byte variant is not replayed:
        // it would add about 2.5 MB of base64 to every artifact.
        SignatureInput {
            label: "long_zero_message",
            seed: key("462cb5313d7750d38416df62931cd826a3657267ecf062dfc81bdfb13539ba10")?,
            message: vec![0u8; 114514],
        },
    ])
}
