// ABOUTME: Helper modules for nutriplan-cli
// ABOUTME: Output formatting for plans and onboarding state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
