//! Auto scaling settings reported and accepted by the global table settings
//! operations.

use std::hash::{Hash, Hasher};

use crate::shape::{eq_f64, hash_f64, shape};

shape! {
    /// Auto scaling settings of a replica or index.
    #[derive(Eq, Hash)]
    pub struct AutoScalingSettingsDescription {
        /// The minimum capacity units.
        pub minimum_units: i64 => with_minimum_units,
        /// The maximum capacity units.
        pub maximum_units: i64 => with_maximum_units,
        /// Whether auto scaling is disabled.
        pub auto_scaling_disabled: bool => with_auto_scaling_disabled,
        /// The IAM role used by auto scaling.
        pub auto_scaling_role_arn: String => with_auto_scaling_role_arn,
        /// The scaling policies in effect.
        pub scaling_policies: Vec<AutoScalingPolicyDescription> => with_scaling_policies,
    }
}

shape! {
    /// Requested auto scaling settings.
    #[derive(Eq, Hash)]
    pub struct AutoScalingSettingsUpdate {
        /// The minimum capacity units.
        pub minimum_units: i64 => with_minimum_units,
        /// The maximum capacity units.
        pub maximum_units: i64 => with_maximum_units,
        /// Whether auto scaling is disabled.
        pub auto_scaling_disabled: bool => with_auto_scaling_disabled,
        /// The IAM role used by auto scaling.
        pub auto_scaling_role_arn: String => with_auto_scaling_role_arn,
        /// The scaling policy to apply.
        pub scaling_policy_update: AutoScalingPolicyUpdate => with_scaling_policy_update,
    }
}

shape! {
    /// A named scaling policy.
    #[derive(Eq, Hash)]
    pub struct AutoScalingPolicyDescription {
        /// The name of the policy.
        pub policy_name: String => with_policy_name,
        /// Target tracking configuration of the policy.
        pub target_tracking_scaling_policy_configuration:
            AutoScalingTargetTrackingScalingPolicyConfigurationDescription
            => with_target_tracking_scaling_policy_configuration,
    }
}

shape! {
    /// A named scaling policy to create or replace.
    #[derive(Eq, Hash)]
    pub struct AutoScalingPolicyUpdate {
        /// The name of the policy.
        pub policy_name: String => with_policy_name,
        /// Target tracking configuration of the policy.
        pub target_tracking_scaling_policy_configuration:
            AutoScalingTargetTrackingScalingPolicyConfigurationUpdate
            => with_target_tracking_scaling_policy_configuration,
    }
}

shape! {
    @manual_eq
    /// Target tracking parameters of a scaling policy.
    pub struct AutoScalingTargetTrackingScalingPolicyConfigurationDescription {
        /// Whether scale in is disabled.
        pub disable_scale_in: bool => with_disable_scale_in,
        /// Seconds after a scale in before another may start.
        pub scale_in_cooldown: i32 => with_scale_in_cooldown,
        /// Seconds after a scale out before another may start.
        pub scale_out_cooldown: i32 => with_scale_out_cooldown,
        /// Target utilization, in percent.
        pub target_value: f64 => with_target_value,
    }
}

shape! {
    @manual_eq
    /// Requested target tracking parameters.
    pub struct AutoScalingTargetTrackingScalingPolicyConfigurationUpdate {
        /// Whether scale in is disabled.
        pub disable_scale_in: bool => with_disable_scale_in,
        /// Seconds after a scale in before another may start.
        pub scale_in_cooldown: i32 => with_scale_in_cooldown,
        /// Seconds after a scale out before another may start.
        pub scale_out_cooldown: i32 => with_scale_out_cooldown,
        /// Target utilization, in percent.
        pub target_value: f64 => with_target_value,
    }
}

macro_rules! impl_target_tracking_eq {
    ($($name:ident),+) => {
        $(
            impl PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    self.disable_scale_in == other.disable_scale_in
                        && self.scale_in_cooldown == other.scale_in_cooldown
                        && self.scale_out_cooldown == other.scale_out_cooldown
                        && eq_f64(self.target_value, other.target_value)
                }
            }

            impl Eq for $name {}

            impl Hash for $name {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.disable_scale_in.hash(state);
                    self.scale_in_cooldown.hash(state);
                    self.scale_out_cooldown.hash(state);
                    hash_f64(self.target_value, state);
                }
            }
        )+
    };
}

impl_target_tracking_eq!(
    AutoScalingTargetTrackingScalingPolicyConfigurationDescription,
    AutoScalingTargetTrackingScalingPolicyConfigurationUpdate
);
