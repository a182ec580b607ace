use geocsv_entities::candidate::GeocodeResult;

pub trait GeoCodingGateway {
    /// Resolves a single, already normalized address.
    ///
    /// Implementations must never fail: transport and
    /// decoding errors are reported as [`GeocodeResult::Failed`].
    fn lookup(&self, address: &str) -> GeocodeResult;
}
