//! Signing, verification and full token round-trip benchmarks

use credo_jwt::{
    Algorithm, HmacSigner, JwtHeader, JwtPayload, JwtVerifier, RsaSsaPkcsSigner, SignedJwt,
    Signer, UnsignedJwt, VerificationContext,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;

const PRIVATE_PEM: &str = include_str!("../tests/fixtures/rsa_private.pem");
const PUBLIC_PEM: &str = include_str!("../tests/fixtures/rsa_public.pem");

fn signer_for(algorithm: Algorithm) -> Arc<dyn Signer> {
    if algorithm.is_symmetric() {
        Arc::new(HmacSigner::new(algorithm, "benchmark-secret").expect("HMAC signer"))
    } else {
        Arc::new(
            RsaSsaPkcsSigner::from_pem(algorithm, PUBLIC_PEM, Some(PRIVATE_PEM))
                .expect("RSA signer"),
        )
    }
}

/// Raw sign and verify per algorithm over a typical unsigned value size
fn benchmark_signers(c: &mut Criterion) {
    let mut group = c.benchmark_group("signers");
    let data = vec![0x5au8; 256];
    group.throughput(Throughput::Bytes(data.len() as u64));

    for &algorithm in Algorithm::all() {
        let signer = signer_for(algorithm);
        let signature = signer.sign(&data).expect("sign should succeed");

        group.bench_with_input(BenchmarkId::new("sign", algorithm), &data, |b, data| {
            b.iter(|| black_box(signer.sign(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("verify", algorithm), &data, |b, data| {
            b.iter(|| black_box(signer.verify(black_box(data), black_box(&signature))));
        });
    }
    group.finish();
}

/// Issue, encode, decode and verify a token
fn benchmark_token_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_round_trip");

    for algorithm in [Algorithm::Hs256, Algorithm::Rs256] {
        let signer = signer_for(algorithm);
        let verifier = JwtVerifier::new();
        let context = VerificationContext::new(signer.clone()).with_issuer("bench");

        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            b.iter(|| {
                let token = UnsignedJwt::new(
                    JwtHeader::new(algorithm),
                    JwtPayload::new().with_issuer("bench").with_subject("userId"),
                )
                .sign(signer.as_ref())
                .expect("sign should succeed")
                .encode();

                let jwt = SignedJwt::decode(&token).expect("decode should succeed");
                black_box(verifier.verify(&jwt, &context))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_signers, benchmark_token_round_trip);
criterion_main!(benches);
