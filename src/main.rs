// Demonstration driver: evaluates the loss and activation catalogs on fixed
// sample inputs. All real logic lives in the library (src/lib.rs and its
// modules); the integration tests cover these same values.
use losskit::{
    softmax, ActivationFunction, BceLoss, ContrastiveLoss, CrossEntropyLoss, HingeLoss,
    HuberLoss, KlLoss, L1Loss, L2Loss, TripletLoss,
};

fn main() {
    let ground = vec![0.1, 1.0, 0.3, 0.5, 0.7];
    let predicted = vec![0.1, 0.3, 0.4, 0.1, 0.2];

    // Equal-length literals, so none of these can fail.
    println!("L1 = {}", L1Loss::loss(&ground, &predicted).unwrap());
    println!("L2 = {}", L2Loss::loss(&ground, &predicted).unwrap());
    println!("Huber = {}", HuberLoss::loss(&ground, &predicted, 0.2).unwrap());
    println!("BCE = {}", BceLoss::loss(&ground, &predicted).unwrap());
    println!("CE = {}", CrossEntropyLoss::loss(&ground, &predicted).unwrap());
    println!("KL = {}", KlLoss::loss(&ground, &predicted).unwrap());
    println!("hinge = {}", HingeLoss::loss(&ground, &predicted).unwrap());
    println!("softmax = {:?}", softmax(&predicted));
    println!(
        "contrastive = {}",
        ContrastiveLoss::loss(true, &ground, &predicted, 2.0).unwrap()
    );
    println!(
        "triplet = {}",
        TripletLoss::loss(&predicted, &ground, &predicted, 0.2).unwrap()
    );

    let z = 2.0;
    println!("sigmoid({z}) = {}", ActivationFunction::Sigmoid.apply(z));
    println!("tanh({z}) = {}", ActivationFunction::Tanh.apply(z));
    println!("relu({z}) = {}", ActivationFunction::Relu.apply(z));
    println!(
        "prelu({z}) = {}",
        ActivationFunction::PRelu { alpha: 0.1 }.apply(z)
    );
    println!(
        "elu({z}) = {}",
        ActivationFunction::Elu { alpha: 0.1 }.apply(z)
    );
    println!("glu({z}) = {}", ActivationFunction::Glu.apply(z));
    println!(
        "softplus({z}) = {}",
        ActivationFunction::Softplus { beta: 0.1 }.apply(z)
    );
    println!("mish({z}) = {}", ActivationFunction::Mish.apply(z));
}
