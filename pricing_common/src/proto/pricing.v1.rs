// @generated
// Generated from: proto/pricing/v1/pricing.proto
// Manual check-in for offline builds.
//
// Regenerate after editing the proto with tonic-build 0.12 (needs `protoc`):
//   tonic_build::configure()
//       .out_dir("pricing_common/src/proto")
//       .compile_protos(&["proto/pricing/v1/pricing.proto"], &["proto"])
// `proto::tests::generated_fields_match_proto` fails when the two drift apart.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QuoteRequest {
    #[prost(double, tag = "1")]
    pub amount: f64,
    #[prost(int32, tag = "2")]
    pub term_months: i32,
    /// Unset means "no risk score", which pricing treats differently from 0.
    #[prost(double, optional, tag = "3")]
    pub risk_score: ::core::option::Option<f64>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QuoteResponse {
    #[prost(double, tag = "1")]
    pub interest_rate: f64,
    #[prost(double, tag = "2")]
    pub apr: f64,
    #[prost(double, tag = "3")]
    pub monthly_payment: f64,
}

pub mod pricing_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct PricingServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl PricingServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> PricingServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn quote(
            &mut self,
            request: impl tonic::IntoRequest<super::QuoteRequest>,
        ) -> Result<tonic::Response<super::QuoteResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/pricing.v1.PricingService/Quote",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod pricing_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait PricingService: std::marker::Send + std::marker::Sync + 'static {
        async fn quote(
            &self,
            request: tonic::Request<super::QuoteRequest>,
        ) -> Result<tonic::Response<super::QuoteResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct PricingServiceServer<T> {
        inner: Arc<T>,
    }

    impl<T> PricingServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T> Clone for PricingServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T, B> tonic::codegen::Service<http::Request<B>> for PricingServiceServer<T>
    where
        T: PricingService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/pricing.v1.PricingService/Quote" => {
                    struct QuoteSvc<T: PricingService>(pub Arc<T>);
                    impl<T: PricingService> tonic::server::UnaryService<super::QuoteRequest> for QuoteSvc<T> {
                        type Response = super::QuoteResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::QuoteRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            Box::pin(async move { <T as PricingService>::quote(&inner, request).await })
                        }
                    }
                    let inner = self.inner.clone();
                    Box::pin(async move {
                        let method = QuoteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T> tonic::server::NamedService for PricingServiceServer<T> {
        const NAME: &'static str = "pricing.v1.PricingService";
    }
}
