pub mod bce;
pub mod contrastive;
pub mod cross_entropy;
pub mod hinge;
pub mod huber;
pub mod kl;
pub mod l1;
pub mod l2;
pub mod loss_type;
pub mod softmax;
pub mod terms;
pub mod triplet;

pub use bce::BceLoss;
pub use contrastive::ContrastiveLoss;
pub use cross_entropy::CrossEntropyLoss;
pub use hinge::HingeLoss;
pub use huber::HuberLoss;
pub use kl::KlLoss;
pub use l1::L1Loss;
pub use l2::L2Loss;
pub use loss_type::LossType;
pub use softmax::softmax;
pub use triplet::TripletLoss;
