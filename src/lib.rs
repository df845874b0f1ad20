pub mod activation;
pub mod error;
pub mod loss;
pub mod math;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::LossError;
pub use loss::bce::BceLoss;
pub use loss::contrastive::ContrastiveLoss;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use loss::hinge::HingeLoss;
pub use loss::huber::HuberLoss;
pub use loss::kl::KlLoss;
pub use loss::l1::L1Loss;
pub use loss::l2::L2Loss;
pub use loss::loss_type::LossType;
pub use loss::softmax::softmax;
pub use loss::triplet::TripletLoss;
pub use math::reduce::fold_pairwise;
