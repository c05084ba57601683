// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Interface identities.
//!
//! The input and output interfaces are the 10.11 revisions, which current
//! drivers still answer to. The input callback identity is the 11.5.1 one,
//! matching the `SetCallback` signature of `IDeckLinkInput_v10_11`.

use crate::REFIID;

/* 00000000-0000-0000-C000-000000000046 */
pub const IID_IUnknown: REFIID = REFIID::from_u128(0x00000000_0000_0000_C000_000000000046);

/* DD04E5EC-7415-42AB-AE4A-E80C4DFC044A */
pub const IID_IDeckLinkInputCallback: REFIID =
    REFIID::from_u128(0xDD04E5EC_7415_42AB_AE4A_E80C4DFC044A);

/* 20AA5225-1958-47CB-820B-80A8D521A6EE */
pub const IID_IDeckLinkVideoOutputCallback: REFIID =
    REFIID::from_u128(0x20AA5225_1958_47CB_820B_80A8D521A6EE);

/* AF22762B-DFAC-4846-AA79-FA8883560995 */
pub const IID_IDeckLinkInput: REFIID = REFIID::from_u128(0xAF22762B_DFAC_4846_AA79_FA8883560995);

/* CC5C8A6E-3F2F-4B3A-87EA-FD78AF300564 */
pub const IID_IDeckLinkOutput: REFIID = REFIID::from_u128(0xCC5C8A6E_3F2F_4B3A_87EA_FD78AF300564);

/* ABC11843-D966-44CB-96E2-A1CB5D3135C4 */
pub const IID_IDeckLinkAttributes: REFIID =
    REFIID::from_u128(0xABC11843_D966_44CB_96E2_A1CB5D3135C4);

/* 5F558200-4028-49BC-BEAC-DB3FA4A96E46 */
pub const IID_IDeckLinkStatus: REFIID = REFIID::from_u128(0x5F558200_4028_49BC_BEAC_DB3FA4A96E46);
